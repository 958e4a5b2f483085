// Moderation — trait-based abstraction over the hosted verdict provider.
//
// The Moderator trait defines the interface. OpenAiModerator implements it
// against the omni-moderation endpoint. The provider owns all moderation
// logic; this crate only ships content out and reads verdicts back.

pub mod openai;
pub mod traits;
pub mod types;
pub mod verdict;
