/*!
 * Provider implementations for different translation services.
 *
 * This module contains client implementations for various LLM providers:
 * - Ollama: Local LLM server
 * - OpenAI: OpenAI API integration
 * - Anthropic: Anthropic API integration
 *
 * Each client exposes a `complete` call that takes a system prompt and a
 * text fragment and returns the raw model output. The clients are wired
 * together behind `TranslationService`; tests substitute the whole service
 * through the `TextTranslator` trait instead of stubbing individual
 * clients.
 */

pub use self::anthropic::Anthropic;
pub use self::ollama::Ollama;
pub use self::openai::OpenAI;

pub mod anthropic;
pub mod ollama;
pub mod openai;
