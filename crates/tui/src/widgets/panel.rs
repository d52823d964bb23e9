//! The boxed status panel.
//!
//! `render_panel` turns a `ProgressState` into the full text of one frame.
//! It only reads the state and never fails. Field widths are fixed per row,
//! so the right border of the data rows does not always meet the box corners.

use chrono::{DateTime, Utc};
use pc_core::{Elapsed, ProgressState};

use crate::widgets::progress_bar::{percent, progress_bar};

const TOP_BORDER: &str = "┌─────────────────────────────────────────┐";
const TITLE: &str = "│  🚀 KAOSTC - Pipeline Progress          │";
const DIVIDER: &str = "├─────────────────────────────────────────┤";
const BOTTOM_BORDER: &str = "└─────────────────────────────────────────┘";
const RIGHT_BORDER: &str = "│";
const CLOSE_HINT: &str = "Ctrl+C para cerrar este panel";

const PROJECT_WIDTH: usize = 28;
const MILESTONE_NAME_WIDTH: usize = 20;
const PHASE_WIDTH: usize = 32;
const ELAPSED_WIDTH: usize = 30;
const MILESTONE_ROW_WIDTH: usize = 42;

/// Where a milestone sits relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneMark {
    Completed,
    Current,
    Pending,
}

impl MilestoneMark {
    pub fn for_index(index: i64, current: i64) -> Self {
        if index < current {
            MilestoneMark::Completed
        } else if index == current {
            MilestoneMark::Current
        } else {
            MilestoneMark::Pending
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MilestoneMark::Completed => "✓",
            MilestoneMark::Current => "→",
            MilestoneMark::Pending => "○",
        }
    }
}

/// Render the whole panel for `state` as seen at `now`.
///
/// The returned text starts with an empty line and ends with a newline.
pub fn render_panel(state: &ProgressState, now: DateTime<Utc>, bar_width: usize) -> String {
    let milestone = &state.milestone;
    let elapsed = Elapsed::between(state.start_time, now);

    let mut lines = vec![
        String::new(),
        TOP_BORDER.to_string(),
        TITLE.to_string(),
        DIVIDER.to_string(),
        format!(
            "│  Proyecto: {}{RIGHT_BORDER}",
            pad_end(&state.project, PROJECT_WIDTH)
        ),
        format!(
            "│  Milestone: {}/{} - {}{RIGHT_BORDER}",
            milestone.current,
            milestone.total,
            pad_end(
                &truncate_chars(&milestone.name, MILESTONE_NAME_WIDTH),
                MILESTONE_NAME_WIDTH
            )
        ),
        format!("│  Fase: {}{RIGHT_BORDER}", pad_end(&state.phase, PHASE_WIDTH)),
        format!(
            "│  {} {}%      {RIGHT_BORDER}",
            progress_bar(milestone.current, milestone.total, bar_width),
            percent(milestone.current, milestone.total)
        ),
        format!(
            "│  Tiempo: {}{RIGHT_BORDER}",
            pad_end(&elapsed.to_string(), ELAPSED_WIDTH)
        ),
        DIVIDER.to_string(),
    ];

    lines.extend(milestone_rows(milestone.current, milestone.total));

    lines.extend([
        BOTTOM_BORDER.to_string(),
        String::new(),
        format!("  Status: {}", state.status.label()),
        "  ".to_string(),
        format!("  {CLOSE_HINT}"),
        String::new(),
    ]);

    let mut frame = lines.join("\n");
    frame.push('\n');
    frame
}

/// One row per milestone from 1 to `total`; none when `total < 1`.
pub fn milestone_rows(current: i64, total: i64) -> impl Iterator<Item = String> {
    (1..=total).map(move |index| {
        let mark = MilestoneMark::for_index(index, current);
        let row = format!("│  {} M{index}: Milestone {index}", mark.icon());
        format!("{}{RIGHT_BORDER}", pad_end(&row, MILESTONE_ROW_WIDTH))
    })
}

/// Pad with spaces to `width` characters. Longer text is left as is.
fn pad_end(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pc_core::update::StateUpdate;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 1, 18, 0, 0).unwrap()
    }

    fn rows(frame: &str) -> Vec<&str> {
        frame.split('\n').collect()
    }

    #[test]
    fn test_initial_panel() {
        let state = ProgressState::initialize(Some("Atlas"), now());
        let frame = render_panel(&state, now(), 20);

        let expected = [
            "",
            TOP_BORDER,
            TITLE,
            DIVIDER,
            "│  Proyecto: Atlas                       │",
            "│  Milestone: 1/1 - Setup               │",
            "│  Fase: FASE 0                          │",
            "│  ████████████████████ 100%      │",
            "│  Tiempo: 0m 0s                         │",
            DIVIDER,
            "│  → M1: Milestone 1                      │",
            BOTTOM_BORDER,
            "",
            "  Status: RUNNING",
            "  ",
            "  Ctrl+C para cerrar este panel",
            "",
            "",
        ];
        assert_eq!(rows(&frame), expected);
    }

    #[test]
    fn test_milestone_rows_meet_border() {
        for row in milestone_rows(1, 3) {
            assert_eq!(row.chars().count(), TOP_BORDER.chars().count());
        }
    }

    #[test]
    fn test_panel_after_milestone_update() {
        let mut state = ProgressState::initialize(Some("Atlas"), now());
        state.merge(
            &StateUpdate::parse(r#"{"milestone":{"current":2,"total":4,"name":"Build"}}"#)
                .unwrap(),
        );
        let frame = render_panel(&state, now() + Duration::seconds(75), 20);

        assert!(frame.contains("│  Milestone: 2/4 - Build               │"));
        assert!(frame.contains(&format!("│  {}{} 50%      │", "█".repeat(10), "░".repeat(10))));
        assert!(frame.contains("│  Tiempo: 1m 15s"));
        assert!(frame.contains("│  ✓ M1: Milestone 1"));
        assert!(frame.contains("│  → M2: Milestone 2"));
        assert!(frame.contains("│  ○ M3: Milestone 3"));
        assert!(frame.contains("│  ○ M4: Milestone 4"));
        assert!(!frame.contains("M5"));
    }

    #[test]
    fn test_long_values() {
        let mut state = ProgressState::initialize(Some("Atlas"), now());
        state.merge(
            &StateUpdate::parse(
                r#"{"milestone":{"current":1,"total":2,"name":"Integration and acceptance testing"},
                    "project":"an exceptionally long project name"}"#,
            )
            .unwrap(),
        );
        let frame = render_panel(&state, now(), 20);

        // Milestone names are cut to 20 characters, other fields are not
        assert!(frame.contains("│  Milestone: 1/2 - Integration and acce│"));
        assert!(frame.contains("│  Proyecto: an exceptionally long project name│"));
    }

    #[test]
    fn test_zero_total_renders_without_failing() {
        let mut state = ProgressState::initialize(Some("Atlas"), now());
        state.merge(&StateUpdate::parse(r#"{"milestone":{"current":3}}"#).unwrap());
        let frame = render_panel(&state, now(), 20);

        assert!(frame.contains("│  Milestone: 3/0 - "));
        assert!(frame.contains("Infinity%"));
        assert!(!frame.contains("Milestone 1"));
    }

    #[test]
    fn test_status_and_unknown_start_time() {
        let mut state = ProgressState::initialize(Some("Atlas"), now());
        state.merge(&StateUpdate::parse(r#"{"status":"error","startTime":false}"#).unwrap());
        let frame = render_panel(&state, now(), 20);

        assert!(frame.contains("  Status: ERROR\n"));
        assert!(frame.contains("│  Tiempo: NaNm NaNs"));
    }

    #[test]
    fn test_custom_bar_width() {
        let state = ProgressState::initialize(None, now());
        let frame = render_panel(&state, now(), 8);
        assert!(frame.contains(&format!("│  {} 100%      │", "█".repeat(8))));
        assert!(frame.contains("│  Proyecto: Unknown"));
    }

    #[test]
    fn test_milestone_marks() {
        assert_eq!(MilestoneMark::for_index(1, 2), MilestoneMark::Completed);
        assert_eq!(MilestoneMark::for_index(2, 2), MilestoneMark::Current);
        assert_eq!(MilestoneMark::for_index(3, 2), MilestoneMark::Pending);
        assert_eq!(milestone_rows(1, 0).count(), 0);
        assert_eq!(milestone_rows(1, -3).count(), 0);
    }
}
