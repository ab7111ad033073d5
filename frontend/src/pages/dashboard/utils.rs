use leptos::*;

use crate::api::{ApiError, NewTimesheet};

#[derive(Clone, Copy)]
pub struct TimesheetFormState {
    pub user_id: RwSignal<String>,
    pub email: RwSignal<String>,
    pub date: RwSignal<String>,
    pub from_time: RwSignal<String>,
    pub to_time: RwSignal<String>,
    pub task_summary: RwSignal<String>,
    pub hours: RwSignal<String>,
    pub description: RwSignal<String>,
}

impl TimesheetFormState {
    pub fn new() -> Self {
        Self {
            user_id: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            date: create_rw_signal(String::new()),
            from_time: create_rw_signal(String::new()),
            to_time: create_rw_signal(String::new()),
            task_summary: create_rw_signal(String::new()),
            hours: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
        }
    }

    /// Validation happens here, before anything reaches the gateway.
    pub fn to_payload(&self) -> Result<NewTimesheet, ApiError> {
        let user_id = self.user_id.get_untracked().trim().to_string();
        let email = self.email.get_untracked().trim().to_string();
        let date = self.date.get_untracked().trim().to_string();
        let from_time = self.from_time.get_untracked().trim().to_string();
        let to_time = self.to_time.get_untracked().trim().to_string();
        let task_summary = self.task_summary.get_untracked().trim().to_string();
        if user_id.is_empty()
            || email.is_empty()
            || date.is_empty()
            || from_time.is_empty()
            || to_time.is_empty()
            || task_summary.is_empty()
        {
            return Err(ApiError::validation(
                "All fields except description are required.",
            ));
        }

        let hours_raw = self.hours.get_untracked();
        let hours: f64 = hours_raw
            .trim()
            .parse()
            .map_err(|_| ApiError::validation("Hours must be a number."))?;
        if !(hours > 0.0) {
            return Err(ApiError::validation("Hours must be greater than zero."));
        }

        Ok(NewTimesheet {
            user_id,
            email,
            date,
            from_time,
            to_time,
            task_summary,
            hours,
            description: self.description.get_untracked().trim().to_string(),
            submitted: false,
            approved_by: None,
        })
    }

    pub fn reset(&self) {
        self.user_id.set(String::new());
        self.email.set(String::new());
        self.date.set(String::new());
        self.from_time.set(String::new());
        self.to_time.set(String::new());
        self.task_summary.set(String::new());
        self.hours.set(String::new());
        self.description.set(String::new());
    }
}

/// Canned prompts rendered as one-click chat shortcuts.
pub const QUICK_QUESTIONS: &[&str] = &[
    "What is my leave balance?",
    "Show my pending timesheets",
    "How do I apply for leave?",
];

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    fn filled_form() -> TimesheetFormState {
        let form = TimesheetFormState::new();
        form.user_id.set("E100".into());
        form.email.set("e100@example.com".into());
        form.date.set("2025-03-10".into());
        form.from_time.set("09:00".into());
        form.to_time.set("17:00".into());
        form.task_summary.set("support".into());
        form.hours.set("8".into());
        form.description.set("support rota".into());
        form
    }

    #[test]
    fn complete_form_builds_payload_with_fixed_fields() {
        with_runtime(|| {
            let payload = filled_form().to_payload().unwrap();
            assert_eq!(payload.hours, 8.0);
            assert!(!payload.submitted);
            assert_eq!(payload.approved_by, None);
        });
    }

    #[test]
    fn missing_required_fields_fail_validation() {
        with_runtime(|| {
            let form = filled_form();
            form.email.set(String::new());
            assert!(form.to_payload().unwrap_err().is_validation());

            let form = filled_form();
            form.task_summary.set(String::new());
            assert!(form.to_payload().unwrap_err().is_validation());

            // only the description is optional
            let form = filled_form();
            form.description.set(String::new());
            assert!(form.to_payload().is_ok());
        });
    }

    #[test]
    fn non_numeric_hours_fail_before_any_network_call() {
        with_runtime(|| {
            let form = filled_form();
            form.hours.set("abc".into());
            assert_eq!(
                form.to_payload().unwrap_err(),
                ApiError::validation("Hours must be a number.")
            );
        });
    }

    #[test]
    fn zero_or_negative_hours_fail_validation() {
        with_runtime(|| {
            let form = filled_form();
            form.hours.set("0".into());
            assert!(form.to_payload().unwrap_err().is_validation());
            form.hours.set("-2".into());
            assert!(form.to_payload().unwrap_err().is_validation());
        });
    }

    #[test]
    fn reset_clears_every_field() {
        with_runtime(|| {
            let form = filled_form();
            form.reset();
            assert!(form.user_id.get_untracked().is_empty());
            assert!(form.hours.get_untracked().is_empty());
            assert!(form.description.get_untracked().is_empty());
        });
    }
}
