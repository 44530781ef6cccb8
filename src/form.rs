use std::rc::Rc;

use yew::prelude::*;

use crate::link::build_whatsapp_link;
use crate::message::{compose_whatsapp_text, toggle_in_set, JoinMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Incomplete,
    Ready,
}

impl Readiness {
    pub fn is_ready(self) -> bool {
        matches!(self, Readiness::Ready)
    }
}

/// Blank after trimming whitespace and any byte-order mark.
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetName(String),
    SetCity(String),
    SetPhone(String),
    SetWhy(String),
    ToggleFocus(String),
}

/// Join form contents. Empty strings stand for "not given".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub city: String,
    pub phone: String,
    pub focus: Vec<String>,
    pub why: String,
}

impl FormState {
    /// Returns the state after `action`; `self` is left as it was.
    pub fn apply(&self, action: FormAction) -> FormState {
        let mut next = self.clone();
        match action {
            FormAction::SetName(name) => next.name = name,
            FormAction::SetCity(city) => next.city = city,
            FormAction::SetPhone(phone) => next.phone = phone,
            FormAction::SetWhy(why) => next.why = why,
            FormAction::ToggleFocus(title) => next.focus = toggle_in_set(&self.focus, &title),
        }
        next
    }

    pub fn readiness(&self) -> Readiness {
        if is_blank(&self.name) || is_blank(&self.phone) {
            Readiness::Incomplete
        } else {
            Readiness::Ready
        }
    }

    pub fn has_focus(&self, title: &str) -> bool {
        self.focus.iter().any(|f| f == title)
    }

    pub fn message(&self) -> JoinMessage<'_> {
        JoinMessage {
            name: &self.name,
            city: Some(self.city.as_str()),
            phone: &self.phone,
            focus: Some(self.focus.as_slice()),
            why: Some(self.why.as_str()),
        }
    }

    pub fn whatsapp_link(&self, destination: &str) -> String {
        build_whatsapp_link(destination, &compose_whatsapp_text(&self.message()))
    }

    /// Where the call-to-action should go right now, `None` while incomplete.
    pub fn continue_target(&self, destination: &str) -> Option<String> {
        self.readiness()
            .is_ready()
            .then(|| self.whatsapp_link(destination))
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("join form: {:?}", action);
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, phone: &str) -> FormState {
        FormState::default()
            .apply(FormAction::SetName(name.to_string()))
            .apply(FormAction::SetPhone(phone.to_string()))
    }

    #[test]
    fn readiness_gate() {
        assert_eq!(FormState::default().readiness(), Readiness::Incomplete);
        assert_eq!(filled("", "9999").readiness(), Readiness::Incomplete);
        assert_eq!(filled("Madhav", "   ").readiness(), Readiness::Incomplete);
        assert_eq!(filled("  ", "9999").readiness(), Readiness::Incomplete);
        assert_eq!(filled("Madhav", "9999").readiness(), Readiness::Ready);
        assert_eq!(filled(" Madhav ", "\t9999\n").readiness(), Readiness::Ready);
        assert!(filled("a", "b").readiness().is_ready());
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        assert_eq!(filled("\u{FEFF}", "1").readiness(), Readiness::Incomplete);
        assert_eq!(filled("Asha", " \u{FEFF} ").readiness(), Readiness::Incomplete);
        assert_eq!(filled("\u{FEFF}Asha", "1").readiness(), Readiness::Ready);
    }

    #[test]
    fn continue_target_is_gated() {
        assert_eq!(filled("", "1").continue_target("1"), None);
        assert_eq!(filled("Asha", "  ").continue_target("1"), None);

        let state = filled("Asha", "1");
        assert_eq!(state.continue_target("1"), Some(state.whatsapp_link("1")));
    }

    #[test]
    fn continue_target_follows_latest_state() {
        let incomplete = filled("Asha", "");
        let ready = incomplete.apply(FormAction::SetPhone("42".to_string()));
        let edited = ready.apply(FormAction::SetCity("Pune".to_string()));

        assert!(incomplete.continue_target("1").is_none());
        let first = ready.continue_target("1").unwrap_or_default();
        let second = edited.continue_target("1").unwrap_or_default();
        assert!(!first.contains("City%3A"));
        assert!(second.contains("City%3A%20Pune"));
    }

    #[test]
    fn apply_leaves_previous_state_alone() {
        let before = filled("Asha", "1");
        let after = before.apply(FormAction::SetCity("Pune".to_string()));

        assert_eq!(before.city, "");
        assert_eq!(after.city, "Pune");
        assert_eq!(after.name, "Asha");
    }

    #[test]
    fn focus_toggle_stays_unique() {
        let state = FormState::default()
            .apply(FormAction::ToggleFocus("Education".to_string()))
            .apply(FormAction::ToggleFocus("Sustainability".to_string()))
            .apply(FormAction::ToggleFocus("Education".to_string()))
            .apply(FormAction::ToggleFocus("Sustainability".to_string()))
            .apply(FormAction::ToggleFocus("Sanitation drives".to_string()));

        assert_eq!(state.focus, vec!["Sanitation drives".to_string()]);
        assert!(state.has_focus("Sanitation drives"));
        assert!(!state.has_focus("Education"));
    }

    #[test]
    fn link_tracks_latest_edit() {
        let first = filled("A", "1");
        let second = first.apply(FormAction::SetWhy("I care".to_string()));

        let before = first.whatsapp_link("919876543210");
        let after = second.whatsapp_link("919876543210");

        assert!(before.starts_with("https://wa.me/919876543210?text="));
        assert!(!before.contains("Why%20me"));
        assert!(after.contains("Why%20me%3A%20I%20care"));
    }

    #[test]
    fn empty_optionals_are_omitted_from_link() {
        let link = filled("A", "1").whatsapp_link("1");
        assert!(!link.contains("City"));
        assert!(!link.contains("Focus"));
    }

    #[test]
    fn reducer_returns_new_value() {
        let start = Rc::new(FormState::default());
        let next = start.clone().reduce(FormAction::SetName("Kiran".to_string()));

        assert_eq!(start.name, "");
        assert_eq!(next.name, "Kiran");
    }
}
