use std::collections::HashSet;

pub const GREETING: &str = "Hi Impact Tribe! I want to join as an Early Volunteer.";
pub const HASHTAG: &str = "#ImpactTribe";

/// Fields that go into the pre-filled WhatsApp message.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JoinMessage<'a> {
    pub name: &'a str,
    pub city: Option<&'a str>,
    pub phone: &'a str,
    pub focus: Option<&'a [String]>,
    pub why: Option<&'a str>,
}

/// Adds `key` if missing, removes it if present. Returns a new list with no
/// duplicates; callers must not rely on the order of the result.
pub fn toggle_in_set(list: &[String], key: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(list.len() + 1);
    let mut out: Vec<String> = list
        .iter()
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect();

    if seen.contains(key) {
        out.retain(|item| item != key);
    } else {
        out.push(key.to_string());
    }
    out
}

pub fn compose_whatsapp_text(form: &JoinMessage<'_>) -> String {
    let mut lines = vec![GREETING.to_string(), format!("Name: {}", form.name)];

    if let Some(city) = form.city.filter(|c| !c.is_empty()) {
        lines.push(format!("City: {}", city));
    }
    lines.push(format!("Phone: {}", form.phone));
    if let Some(focus) = form.focus.filter(|f| !f.is_empty()) {
        lines.push(format!("Focus: {}", focus.join(", ")));
    }
    if let Some(why) = form.why.filter(|w| !w.is_empty()) {
        lines.push(format!("Why me: {}", why));
    }
    lines.push(HASHTAG.to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn toggle_adds_and_removes_without_duplicates() {
        assert_eq!(toggle_in_set(&[], "A"), strings(&["A"]));
        assert!(toggle_in_set(&strings(&["A"]), "A").is_empty());
        assert_eq!(sorted(toggle_in_set(&strings(&["A"]), "B")), strings(&["A", "B"]));
    }

    #[test]
    fn toggle_twice_restores_the_set() {
        let start = strings(&["Education", "Sustainability", "Sanitation drives"]);
        for key in ["Education", "Acid attack victims", ""] {
            let back = toggle_in_set(&toggle_in_set(&start, key), key);
            assert_eq!(sorted(back), sorted(start.clone()));
        }
    }

    #[test]
    fn toggle_keeps_other_elements_exactly_once() {
        let start = strings(&["a", "b", "c"]);

        let removed = toggle_in_set(&start, "b");
        assert!(!removed.contains(&"b".to_string()));
        assert_eq!(sorted(removed), strings(&["a", "c"]));

        let added = toggle_in_set(&start, "d");
        assert_eq!(sorted(added), strings(&["a", "b", "c", "d"]));
    }

    #[test]
    fn toggle_does_not_touch_input() {
        let start = strings(&["x"]);
        let _ = toggle_in_set(&start, "x");
        assert_eq!(start, strings(&["x"]));
    }

    #[test]
    fn toggle_collapses_duplicate_input() {
        let out = toggle_in_set(&strings(&["a", "a", "b"]), "c");
        assert_eq!(sorted(out), strings(&["a", "b", "c"]));

        let out = toggle_in_set(&strings(&["a", "a", "b"]), "a");
        assert_eq!(out, strings(&["b"]));
    }

    #[test]
    fn compose_includes_all_fields() {
        let focus = strings(&["Education", "Sustainability"]);
        let msg = compose_whatsapp_text(&JoinMessage {
            name: "Madhav",
            city: Some("Delhi"),
            phone: "9999",
            focus: Some(&focus),
            why: Some("I care"),
        });

        assert!(msg.contains("Name: Madhav"));
        assert!(msg.contains("City: Delhi"));
        assert!(msg.contains("Phone: 9999"));
        assert!(msg.contains("Focus: Education, Sustainability"));
        assert!(msg.contains("Why me: I care"));
        assert!(msg.split('\n').count() > 3);
        assert_eq!(
            msg,
            "Hi Impact Tribe! I want to join as an Early Volunteer.\n\
             Name: Madhav\n\
             City: Delhi\n\
             Phone: 9999\n\
             Focus: Education, Sustainability\n\
             Why me: I care\n\
             #ImpactTribe"
        );
    }

    #[test]
    fn compose_omits_missing_optional_lines() {
        let empty: Vec<String> = Vec::new();
        let variants = [
            JoinMessage { name: "A", phone: "1", ..Default::default() },
            JoinMessage {
                name: "A",
                phone: "1",
                city: Some(""),
                focus: Some(&empty),
                why: Some(""),
            },
        ];

        for form in variants {
            let msg = compose_whatsapp_text(&form);
            assert!(msg
                .lines()
                .all(|l| !l.starts_with("City:") && !l.starts_with("Focus:") && !l.starts_with("Why me:")));
            assert_eq!(msg.lines().collect::<Vec<_>>(), vec![GREETING, "Name: A", "Phone: 1", HASHTAG]);
        }
    }

    #[test]
    fn compose_leaves_whitespace_untouched() {
        let msg = compose_whatsapp_text(&JoinMessage {
            name: "  Asha ",
            phone: " 42",
            why: Some(" "),
            ..Default::default()
        });
        assert!(msg.contains("Name:   Asha \n"));
        assert!(msg.contains("Phone:  42\n"));
        assert!(msg.contains("Why me:  \n"));
    }
}
