//! Input validation utilities for the student area

use crate::models::{ProfileDraft, ReviewDraft};

/// Validate a review draft
pub fn validate_review(draft: &ReviewDraft) -> Result<(), String> {
    if !(1..=5).contains(&draft.rating) {
        return Err("Nilai harus antara 1 dan 5".to_string());
    }

    if draft.comment.trim().is_empty() {
        return Err("Komentar wajib diisi".to_string());
    }

    Ok(())
}

/// Validate a profile draft
pub fn validate_profile(draft: &ProfileDraft) -> Result<(), String> {
    if draft.name.trim().is_empty() {
        return Err("Nama wajib diisi".to_string());
    }

    Ok(())
}

/// Validate a redeem code entry before it is sent
pub fn validate_redeem_entry(code: &str) -> Result<(), String> {
    if code.trim().is_empty() {
        return Err("Kode wajib diisi".to_string());
    }

    Ok(())
}
