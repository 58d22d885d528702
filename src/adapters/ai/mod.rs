//! AI Provider Adapters.
//!
//! - `OpenAIProvider` - OpenAI chat completions
//! - `MockAIProvider` - Configurable mock for testing

mod mock_provider;
mod openai_provider;

pub use mock_provider::{MockAIProvider, MockError, MockResponse, DEFAULT_MOCK_CONTENT};
pub use openai_provider::{OpenAIConfig, OpenAIProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};
