//! Input validation utilities for the classroom area
//!
//! These checks run before any network call; a failure keeps the modal open
//! with the message inline.

use crate::models::{MaterialDraft, QuestionDraft, QuizDraft, SectionDraft};

/// Validate a section draft
pub fn validate_section(draft: &SectionDraft) -> Result<(), String> {
    if draft.title.trim().is_empty() {
        return Err("Judul bagian wajib diisi".to_string());
    }

    if draft.position < 1 {
        return Err("Urutan minimal 1".to_string());
    }

    Ok(())
}

/// Validate a material draft
pub fn validate_material(draft: &MaterialDraft) -> Result<(), String> {
    if draft.title.trim().is_empty() {
        return Err("Judul materi wajib diisi".to_string());
    }

    if draft.url.trim().is_empty() {
        return Err("Tautan materi wajib diisi".to_string());
    }

    if draft.position < 1 {
        return Err("Urutan minimal 1".to_string());
    }

    Ok(())
}

/// Validate a quiz draft
pub fn validate_quiz(draft: &QuizDraft) -> Result<(), String> {
    if draft.title.trim().is_empty() {
        return Err("Judul kuis wajib diisi".to_string());
    }

    if draft.duration_minutes < 1 {
        return Err("Durasi minimal 1 menit".to_string());
    }

    if draft.passing_score > 100 {
        return Err("Nilai kelulusan maksimal 100".to_string());
    }

    Ok(())
}

/// Validate a question draft
///
/// A question needs a prompt, at least two filled-in options, and exactly
/// one option marked correct.
pub fn validate_question(draft: &QuestionDraft) -> Result<(), String> {
    if draft.prompt.trim().is_empty() {
        return Err("Pertanyaan wajib diisi".to_string());
    }

    if draft.answers.len() < 2 {
        return Err("Minimal 2 pilihan jawaban".to_string());
    }

    if draft.answers.iter().any(|a| a.text.trim().is_empty()) {
        return Err("Semua pilihan jawaban wajib diisi".to_string());
    }

    let correct = draft.answers.iter().filter(|a| a.is_correct).count();
    if correct != 1 {
        return Err("Tandai tepat satu jawaban benar".to_string());
    }

    Ok(())
}
