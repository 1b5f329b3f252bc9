//! Input validation utilities for the admin area
//!
//! These checks run before any network call; a failure keeps the modal open
//! with the message inline.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{MentorDraft, RedeemCodeDraft};

/// Validate a redeem-code draft
pub fn validate_redeem_code(draft: &RedeemCodeDraft) -> Result<(), String> {
    if draft.description.trim().is_empty() {
        return Err("Deskripsi wajib diisi".to_string());
    }

    if draft.duration_days < 1 {
        return Err("Durasi minimal 1 hari".to_string());
    }

    if draft.max_uses < 1 {
        return Err("Batas penggunaan minimal 1".to_string());
    }

    Ok(())
}

/// Validate a mentor draft
pub fn validate_mentor(draft: &MentorDraft) -> Result<(), String> {
    if draft.name.trim().is_empty() {
        return Err("Nama wajib diisi".to_string());
    }

    validate_email(&draft.email)?;

    if draft.expertise.trim().is_empty() {
        return Err("Bidang keahlian wajib diisi".to_string());
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email wajib diisi".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Format email tidak valid".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redeem_code_duration_boundary() {
        let mut draft = RedeemCodeDraft {
            description: "Promo kelas".to_string(),
            ..Default::default()
        };

        draft.duration_days = 0;
        assert_eq!(
            validate_redeem_code(&draft),
            Err("Durasi minimal 1 hari".to_string())
        );

        draft.duration_days = 1;
        assert!(validate_redeem_code(&draft).is_ok());
    }

    #[test]
    fn test_mentor_requires_valid_email() {
        let draft = MentorDraft {
            name: "Budi Santoso".to_string(),
            email: "bukan-email".to_string(),
            expertise: "Matematika".to_string(),
            ..Default::default()
        };
        assert_eq!(
            validate_mentor(&draft),
            Err("Format email tidak valid".to_string())
        );
    }
}
