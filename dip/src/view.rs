//! View state for the lucky-dip card.
//!
//! The card is modelled as an explicit state value updated by a pure
//! reducer; writing it to the terminal is a separate step. Overlapping
//! rolls are not de-duplicated - the last settlement to be applied wins.

use luckydip_client::RandomRecord;

/// The fixed text shown in the title slot when a roll fails.
pub static ERROR_TITLE: &str = "⚠️ Error fetching record";

/// How one roll settled.
#[derive(Debug)]
pub enum RollOutcome {
    /// The endpoint returned a record.
    Success(RandomRecord),
    /// The request failed: transport error, bad body, or non-2xx status.
    Failure(String),
}

/// A state transition of the card.
#[derive(Debug)]
pub enum RollEvent {
    /// A roll was started.
    Started,
    /// A roll settled, one way or the other.
    Settled(RollOutcome),
}

/// The five display slots of the card plus the loading flag.
#[derive(Debug, Default)]
pub struct ViewState {
    /// The search term that selected the record.
    pub query: String,
    /// The record title, or a placeholder.
    pub title: String,
    /// The holding institution, or a placeholder.
    pub held_by: String,
    /// The record description; empty when the catalogue has none.
    pub description: String,
    /// The link target, shown verbatim as the link label too.
    pub url: String,
    /// Whether a roll is currently in flight.
    pub loading: bool,
}

/// Missing and empty strings both fall back to the placeholder.
fn text_or(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => placeholder.to_string(),
    }
}

impl ViewState {
    /// Fold one event into the state.
    ///
    /// A failed roll only replaces the title slot; everything else keeps
    /// showing whatever the previous roll put there.
    pub fn apply(&mut self, event: RollEvent) {
        match event {
            RollEvent::Started => {
                self.loading = true;
            }
            RollEvent::Settled(outcome) => {
                self.loading = false;
                match outcome {
                    RollOutcome::Success(record) => {
                        self.query = record.query;
                        self.title = text_or(record.title, "Untitled");
                        self.held_by = text_or(record.held_by, "Unknown");
                        self.description = record.description.unwrap_or_default();
                        self.url = record.url;
                    }
                    RollOutcome::Failure(_) => {
                        self.title = ERROR_TITLE.to_string();
                    }
                }
            }
        }
    }
}

/// Write the card to the given destination.
pub fn render<W: std::io::Write>(state: &ViewState, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", console::style("— Lucky dip result —").bold())?;
    writeln!(writer, "Title      : {}", console::style(&state.title).cyan())?;
    writeln!(writer, "Held by    : {}", &state.held_by)?;
    if !state.description.is_empty() {
        writeln!(writer, "Description: {}", &state.description)?;
    }
    writeln!(
        writer,
        "Open       : {}",
        console::style(&state.url).underlined()
    )?;
    writeln!(writer, "Query      : {}", &state.query)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> RandomRecord {
        RandomRecord {
            query: "castle".to_string(),
            title: Some("Plan of Dover Castle".to_string()),
            held_by: Some("The National Archives, Kew".to_string()),
            description: Some("Coloured plan, 1756.".to_string()),
            url: "https://example.org/r/C123".to_string(),
        }
    }

    #[test]
    fn test_success_fills_all_slots() {
        let mut state = ViewState::default();
        state.apply(RollEvent::Started);
        state.apply(RollEvent::Settled(RollOutcome::Success(full_record())));
        assert_eq!(state.query, "castle");
        assert_eq!(state.title, "Plan of Dover Castle");
        assert_eq!(state.held_by, "The National Archives, Kew");
        assert_eq!(state.description, "Coloured plan, 1756.");
        assert_eq!(state.url, "https://example.org/r/C123");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let mut state = ViewState::default();
        state.apply(RollEvent::Settled(RollOutcome::Success(RandomRecord {
            query: "river".to_string(),
            title: None,
            held_by: None,
            description: None,
            url: "https://example.org/r/1".to_string(),
        })));
        assert_eq!(state.title, "Untitled");
        assert_eq!(state.held_by, "Unknown");
        assert_eq!(state.description, "");
    }

    #[test]
    fn test_empty_fields_fall_back() {
        let mut state = ViewState::default();
        state.apply(RollEvent::Settled(RollOutcome::Success(RandomRecord {
            query: "river".to_string(),
            title: Some(String::new()),
            held_by: Some(String::new()),
            description: Some(String::new()),
            url: "https://example.org/r/1".to_string(),
        })));
        assert_eq!(state.title, "Untitled");
        assert_eq!(state.held_by, "Unknown");
        assert_eq!(state.description, "");
    }

    #[test]
    fn test_failure_only_touches_title() {
        let mut state = ViewState::default();
        state.apply(RollEvent::Settled(RollOutcome::Success(full_record())));
        state.apply(RollEvent::Started);
        state.apply(RollEvent::Settled(RollOutcome::Failure(
            "connection refused".to_string(),
        )));
        assert_eq!(state.title, ERROR_TITLE);
        assert_eq!(state.query, "castle");
        assert_eq!(state.held_by, "The National Archives, Kew");
        assert_eq!(state.description, "Coloured plan, 1756.");
        assert_eq!(state.url, "https://example.org/r/C123");
        assert!(!state.loading);
    }

    #[test]
    fn test_loading_spans_started_to_settled() {
        let mut state = ViewState::default();
        assert!(!state.loading);
        state.apply(RollEvent::Started);
        assert!(state.loading);
        state.apply(RollEvent::Settled(RollOutcome::Failure("boom".to_string())));
        assert!(!state.loading);
    }

    #[test]
    fn test_last_settlement_wins() {
        let mut state = ViewState::default();
        // Two overlapping rolls: whichever settles last overwrites the card.
        state.apply(RollEvent::Started);
        state.apply(RollEvent::Started);
        state.apply(RollEvent::Settled(RollOutcome::Success(full_record())));
        state.apply(RollEvent::Settled(RollOutcome::Success(RandomRecord {
            query: "crown".to_string(),
            title: Some("Coronation order".to_string()),
            held_by: None,
            description: None,
            url: "https://example.org/r/2".to_string(),
        })));
        assert_eq!(state.title, "Coronation order");
        assert_eq!(state.url, "https://example.org/r/2");
    }

    #[test]
    fn test_render_shows_all_slots() {
        let mut state = ViewState::default();
        state.apply(RollEvent::Settled(RollOutcome::Success(full_record())));
        let mut output = Vec::new();
        render(&state, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Plan of Dover Castle"));
        assert!(text.contains("The National Archives, Kew"));
        assert!(text.contains("Coloured plan, 1756."));
        assert!(text.contains("https://example.org/r/C123"));
        assert!(text.contains("castle"));
    }

    #[test]
    fn test_render_omits_empty_description() {
        let mut state = ViewState::default();
        state.apply(RollEvent::Settled(RollOutcome::Success(RandomRecord {
            query: "river".to_string(),
            title: None,
            held_by: None,
            description: None,
            url: "https://example.org/r/1".to_string(),
        })));
        let mut output = Vec::new();
        render(&state, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(!text.contains("Description:"));
        assert!(text.contains("Untitled"));
        assert!(text.contains("Unknown"));
    }
}
