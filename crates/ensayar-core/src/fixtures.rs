//! Literal startup data for the playground.
//!
//! The page always starts from the same five cases and the same mock user;
//! nothing is added or removed afterwards.

use crate::model::{CaseId, Category, TestCase, UserProfile};

/// The five demo cases, in display order.
#[must_use]
pub fn sample_cases() -> Vec<TestCase> {
    vec![
        TestCase::new(CaseId::new(1), "should add two numbers correctly", Category::Unit)
            .code("assert_eq!(add(2, 2), 4);"),
        TestCase::new(
            CaseId::new(2),
            "should mock API call successfully",
            Category::Integration,
        )
        .code("let data = api.fetch_user().await?;\nassert!(data.success);"),
        TestCase::new(
            CaseId::new(3),
            "Button should be disabled while loading",
            Category::Ui,
        )
        .code("let panel = MockDataPanel::loading();\nassert!(panel.fetch_disabled());"),
        TestCase::new(CaseId::new(4), "Modal should trap focus when open", Category::Ui)
            .code("let modal = Modal::open();\nassert!(modal.contains_focus());"),
        TestCase::new(
            CaseId::new(5),
            "Form validation shows error messages",
            Category::Ui,
        )
        .code("form.submit();\nassert_eq!(form.error(), Some(\"Required\"));"),
    ]
}

/// The constant payload the mock API resolves.
#[must_use]
pub fn sample_user() -> UserProfile {
    UserProfile::new(1, "Test User", "test@example.com")
}
