use dataflow_core::View;
use dataflow_model::format::DataFormat;
use dataflow_model::navigation::NavigationSection;
use dataflow_model::session::AuthView;
use dataflow_model::workflow::{ConversionPhase, PROGRESS_COMPLETE, WorkflowState};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

pub(crate) fn render_view(view: &View) -> String {
    match view {
        View::Login(AuthView::SignIn) => "Welcome Back!\n\
             Please enter your details to sign in.\n  \
             /login <email> <password>\n  \
             /google to sign in with the provider\n  \
             /signup to create an account"
            .to_owned(),
        View::Login(AuthView::Register) => "Create an Account\n  \
             /register <first> <last> <email> <password> <confirm>\n  \
             /signin if you already have an account"
            .to_owned(),
        View::Placeholder(section) => render_placeholder(*section),
        View::Upload(state) => render_workflow(state),
    }
}

fn render_placeholder(section: NavigationSection) -> String {
    format!("{section}: Coming Soon\nThis section is under construction. Use /section upload to convert files.")
}

pub(crate) fn render_workflow(state: &WorkflowState) -> String {
    let Some(file) = &state.selected_file else {
        return "Drag and drop is not available here, select a file instead.\n\
                Supported formats: JSON, CSV, Parquet and Avro.\n  \
                /upload <path>"
            .to_owned();
    };

    let mut out = format!("File: {} ({}, {})\n", file.name, file.format, file.display_size());
    if let Some(modified) = file.last_modified {
        let _ = writeln!(out, "Modified: {}", modified.format("%Y-%m-%d %H:%M UTC"));
    }
    if let Some(checksum) = &file.checksum {
        let _ = writeln!(out, "xxh3: {checksum}");
    }
    match state.conversion_phase {
        ConversionPhase::Idle => {
            let _ = write!(out, "Select the output format: {}\n  /convert <format>", target_list(state));
        }
        ConversionPhase::Converting => out.push_str(&progress_line(state)),
        ConversionPhase::Succeeded => {
            let _ = write!(
                out,
                "Conversion complete! Your file was converted to {}.\n  /download to save it\n  /reset to convert another file",
                target_name(state.target_format)
            );
        }
        ConversionPhase::Failed => out.push_str("Conversion failed.\n  /reset to try again"),
    }
    out
}

pub(crate) fn render_targets(state: &WorkflowState) -> String {
    if state.is_empty() {
        "No file selected, use /upload <path> first.".to_owned()
    } else {
        format!("Suggested output formats: {}", target_list(state))
    }
}

pub(crate) fn progress_line(state: &WorkflowState) -> String {
    format!(
        "Converting to {}... {} {:>3}%",
        target_name(state.target_format),
        progress_bar(state.progress_percent),
        state.progress_percent
    )
}

pub(crate) fn progress_bar(percent: u8) -> String {
    let percent = usize::from(percent.min(PROGRESS_COMPLETE));
    let filled = percent * BAR_WIDTH / usize::from(PROGRESS_COMPLETE);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Short state for the prompt.
pub(crate) fn prompt_label(view: &View) -> String {
    match view {
        View::Login(AuthView::SignIn) => "sign-in".to_owned(),
        View::Login(AuthView::Register) => "register".to_owned(),
        View::Placeholder(section) => section.to_string(),
        View::Upload(state) => match (&state.selected_file, state.conversion_phase) {
            (None, _) => "upload".to_owned(),
            (Some(file), ConversionPhase::Idle) => format!("upload {}", file.name),
            (Some(_), ConversionPhase::Converting) => format!("converting {}%", state.progress_percent),
            (Some(_), phase) => phase.to_string(),
        },
    }
}

fn target_list(state: &WorkflowState) -> String {
    state
        .available_targets()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn target_name(target: Option<DataFormat>) -> String {
    target.map_or_else(|| "?".to_owned(), |format| format.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use dataflow_model::upload::{UploadCandidate, UploadedFile};

    fn state(phase: ConversionPhase, progress: u8) -> WorkflowState {
        let file = UploadedFile::new(
            UploadCandidate::new("report.csv", Some("text/csv".to_owned()), vec![0; 2048]),
            DataFormat::Csv,
        );
        WorkflowState {
            conversion_phase: phase,
            target_format: (phase != ConversionPhase::Idle).then_some(DataFormat::Json),
            progress_percent: progress,
            ..WorkflowState::with_file(file)
        }
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), format!("[{}]", "-".repeat(20)));
        assert_eq!(progress_bar(50), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(progress_bar(100), format!("[{}]", "#".repeat(20)));
        assert_eq!(progress_bar(250), progress_bar(100));
    }

    #[test]
    fn test_render_idle_lists_targets() {
        let text = render_workflow(&state(ConversionPhase::Idle, 0));
        assert!(text.contains("report.csv (CSV, 2 KB)"));
        assert!(text.contains("Parquet, Avro"));
    }

    #[test]
    fn test_render_source_details() {
        let mut state = state(ConversionPhase::Idle, 0);
        if let Some(file) = state.selected_file.as_mut() {
            file.checksum = Some("1a2b3c4d5e6f7a8b".to_owned());
            file.last_modified = DateTime::from_timestamp(1_700_000_000, 0);
        }
        let text = render_workflow(&state);
        assert!(text.contains("Modified: 2023-11-14 22:13 UTC"));
        assert!(text.contains("xxh3: 1a2b3c4d5e6f7a8b"));

        let plain = render_workflow(&self::state(ConversionPhase::Idle, 0));
        assert!(!plain.contains("xxh3"));
    }

    #[test]
    fn test_render_converting() {
        let text = render_workflow(&state(ConversionPhase::Converting, 40));
        assert!(text.contains("Converting to JSON"));
        assert!(text.contains(" 40%"));
    }

    #[test]
    fn test_render_succeeded() {
        let text = render_workflow(&state(ConversionPhase::Succeeded, 100));
        assert!(text.contains("Conversion complete! Your file was converted to JSON."));
    }

    #[test]
    fn test_render_empty() {
        let text = render_view(&View::Upload(WorkflowState::default()));
        assert!(text.contains("JSON, CSV, Parquet and Avro"));
        assert!(render_targets(&WorkflowState::default()).starts_with("No file selected"));
    }

    #[test]
    fn test_prompt_label() {
        assert_eq!(prompt_label(&View::Login(AuthView::SignIn)), "sign-in");
        assert_eq!(prompt_label(&View::Placeholder(NavigationSection::Files)), "files");
        assert_eq!(
            prompt_label(&View::Upload(state(ConversionPhase::Converting, 30))),
            "converting 30%"
        );
        assert_eq!(prompt_label(&View::Upload(state(ConversionPhase::Succeeded, 100))), "succeeded");
    }
}
