//! Document Generate - View Model
//!
//! Owns the form fields as individual signals plus the generation phase,
//! and drives the submit lifecycle. The network and the editor are passed
//! in as traits so the whole flow is testable off the browser.

use contracts::domain::a001_document::generation::{
    GeneratedContent, GenerationRequest, GenerationRequestFailed, DEFAULT_LANGUAGE, DEFAULT_TONE,
    DEFAULT_WORD_COUNT,
};
use leptos::prelude::*;
use uuid::Uuid;

use super::model::GenerationBackend;
use crate::domain::a001_document::lifecycle::GenerationPhase;
use crate::shared::block_editor::EditorSurface;

/// One editable heading row. The key survives removals and re-renders so
/// keyed rows keep their identity while indices shift.
#[derive(Clone)]
pub struct SectionEntry {
    pub key: Uuid,
    pub name: RwSignal<String>,
}

impl SectionEntry {
    fn empty() -> Self {
        Self {
            key: Uuid::new_v4(),
            name: RwSignal::new(String::new()),
        }
    }
}

#[derive(Clone, Copy)]
pub struct GeneratePageVm {
    pub title: RwSignal<String>,
    pub sections: RwSignal<Vec<SectionEntry>>,
    pub tone: RwSignal<String>,
    /// Edited as free text; parsed on submit with the default as fallback.
    pub word_count: RwSignal<String>,
    pub language: RwSignal<String>,
    pub keywords: RwSignal<Vec<String>>,
    pub phase: RwSignal<GenerationPhase>,
}

impl GeneratePageVm {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            sections: RwSignal::new(Vec::new()),
            tone: RwSignal::new(DEFAULT_TONE.to_string()),
            word_count: RwSignal::new(DEFAULT_WORD_COUNT.to_string()),
            language: RwSignal::new(DEFAULT_LANGUAGE.to_string()),
            keywords: RwSignal::new(Vec::new()),
            phase: RwSignal::new(GenerationPhase::Idle),
        }
    }

    /// Validate form data
    fn validate_form(title: &str) -> Result<(), &'static str> {
        // No trim here: a whitespace-only title counts as filled in.
        if title.is_empty() {
            return Err("Title is required");
        }
        Ok(())
    }

    /// Tracked validity, for the submit button's disabled state.
    pub fn is_form_valid(&self) -> bool {
        Self::validate_form(&self.title.get()).is_ok()
    }

    pub fn add_section(&self) {
        self.sections.update(|sections| sections.push(SectionEntry::empty()));
    }

    /// Removes the heading at `index`; out-of-range indices are ignored and
    /// the order of the remaining rows is untouched.
    pub fn remove_section(&self, index: usize) {
        self.sections.update(|sections| {
            if index < sections.len() {
                sections.remove(index);
            }
        });
    }

    /// Key-based removal used by keyed rows: the current position of the row
    /// is resolved first, so earlier removals cannot make the index stale.
    pub fn remove_entry(&self, key: Uuid) {
        let index = self
            .sections
            .with_untracked(|sections| sections.iter().position(|entry| entry.key == key));
        if let Some(index) = index {
            self.remove_section(index);
        }
    }

    /// Heading texts from the form rows, in row order, verbatim.
    pub fn form_headings(&self) -> Vec<String> {
        self.sections
            .with_untracked(|sections| sections.iter().map(|entry| entry.name.get_untracked()).collect())
    }

    /// Restores every field to its initial value. Clearing the editor is the
    /// caller's job. A pending request keeps its flag: the in-flight call
    /// drops it on completion.
    pub fn reset(&self) {
        self.title.set(String::new());
        self.sections.set(Vec::new());
        self.tone.set(DEFAULT_TONE.to_string());
        self.word_count.set(DEFAULT_WORD_COUNT.to_string());
        self.language.set(DEFAULT_LANGUAGE.to_string());
        self.keywords.set(Vec::new());
        self.phase.update(|phase| {
            if !phase.is_pending() {
                *phase = GenerationPhase::Idle;
            }
        });
    }

    /// Snapshot of the current form as a request body. `headings_override`
    /// carries editor-scanned headings when that strategy is configured.
    pub fn build_request(&self, headings_override: Option<Vec<String>>) -> GenerationRequest {
        GenerationRequest {
            title: self.title.get_untracked(),
            sections: headings_override.unwrap_or_else(|| self.form_headings()),
            tone: self.tone.get_untracked(),
            word_count: self
                .word_count
                .get_untracked()
                .trim()
                .parse()
                .unwrap_or(DEFAULT_WORD_COUNT),
            language: self.language.get_untracked(),
            keywords: self.keywords.get_untracked(),
        }
    }

    /// Synchronous submit gate: at most one request in flight. Returns the
    /// request to dispatch, or `None` when validation fails or another
    /// request is still pending, so rapid repeated clicks dispatch once.
    pub fn try_begin(&self, headings_override: Option<Vec<String>>) -> Option<GenerationRequest> {
        if Self::validate_form(&self.title.get_untracked()).is_err() {
            return None;
        }
        if !self.phase.get_untracked().can_submit() {
            return None;
        }
        self.phase.set(GenerationPhase::Pending);
        Some(self.build_request(headings_override))
    }

    /// Drives one accepted request to completion. On success the response
    /// content replaces the editor document and the phase turns `Ready`; on
    /// failure the editor is left untouched, the phase turns `Failed`, and
    /// the error is handed back exactly once for notification.
    pub async fn run_generation(
        &self,
        backend: &impl GenerationBackend,
        editor: &impl EditorSurface,
        request: GenerationRequest,
    ) -> Result<(), GenerationRequestFailed> {
        let outcome = match backend.generate(&request).await {
            Ok(response) => apply_content(editor, &response.content).await,
            Err(err) => Err(err),
        };

        match outcome {
            Ok(()) => {
                self.phase.set(GenerationPhase::Ready);
                Ok(())
            }
            Err(err) => {
                self.phase.set(GenerationPhase::Failed);
                Err(err)
            }
        }
    }
}

impl Default for GeneratePageVm {
    fn default() -> Self {
        Self::new()
    }
}

/// Hands generated content to the editor: markdown goes through the
/// editor's own parser, block lists replace the document directly.
async fn apply_content(
    editor: &impl EditorSurface,
    content: &GeneratedContent,
) -> Result<(), GenerationRequestFailed> {
    let result = match content {
        GeneratedContent::Markdown(markdown) => editor.load_markdown(markdown).await,
        GeneratedContent::Blocks(blocks) => editor.load_blocks(blocks).await,
    };
    result.map_err(|reason| GenerationRequestFailed::new(format!("Editor rejected content: {}", reason)))
}
