//! Keyword-based intent routing for assistant prompts.
//!
//! The router is a stopgap until real language-model integration lands:
//! it lowercases the prompt and checks a fixed, ordered list of keyword
//! predicates. The first predicate that matches wins.

/// A recognized prompt intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    CreateScene,
    AddNode,
    SaveScene,
    /// No predicate matched; the prompt is echoed back, never acted on.
    Unrecognized,
}

/// Classify a free-text prompt into exactly one [`Intent`].
///
/// Matching is case-insensitive and order-sensitive: a prompt containing
/// both "create … scene" and "save" resolves to [`Intent::CreateScene`].
pub fn classify(text: &str) -> Intent {
    let prompt = text.to_lowercase();

    if prompt.contains("create") && prompt.contains("scene") {
        Intent::CreateScene
    } else if prompt.contains("add") && prompt.contains("node") {
        Intent::AddNode
    } else if prompt.contains("save") {
        Intent::SaveScene
    } else {
        Intent::Unrecognized
    }
}
