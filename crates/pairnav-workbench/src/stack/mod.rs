//! Tab stacks: the open editors of one editor group.

mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn p(s: &str) -> &Path {
        Path::new(s)
    }

    #[test]
    fn new_stack_is_empty() {
        let stack = TabStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.active(), None);
    }

    #[test]
    fn open_makes_tab_active() {
        let mut stack = TabStack::new();
        stack.open("a.ts", false);
        stack.open("b.ts", false);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.active(), Some(p("b.ts")));
    }

    #[test]
    fn reopen_reuses_existing_tab() {
        let mut stack = TabStack::new();
        stack.open("a.ts", false);
        stack.open("b.ts", false);
        stack.open("a.ts", false);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.active(), Some(p("a.ts")));
    }

    #[test]
    fn preview_replaces_previous_preview() {
        let mut stack = TabStack::new();
        stack.open("a.ts", false);
        stack.open("b.graphql", true);
        stack.open("c.graphql", true);

        assert_eq!(stack.len(), 2);
        assert!(!stack.contains(p("b.graphql")));
        assert_eq!(stack.preview_tab(), Some(p("c.graphql")));
        assert_eq!(stack.active_index(), Some(1));
    }

    #[test]
    fn regular_open_pins_preview() {
        let mut stack = TabStack::new();
        stack.open("b.graphql", true);
        stack.open("b.graphql", false);
        assert_eq!(stack.preview_tab(), None);

        stack.open("c.graphql", true);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn preview_reopen_keeps_pinned_tab() {
        let mut stack = TabStack::new();
        stack.open("a.ts", false);
        stack.open("a.ts", true);
        assert_eq!(stack.preview_tab(), None);
    }

    #[test]
    fn pin_only_affects_previews() {
        let mut stack = TabStack::new();
        stack.open("a.ts", false);
        stack.open("b.ts", true);
        assert!(!stack.pin(p("a.ts")));
        assert!(stack.pin(p("b.ts")));
        assert!(!stack.pin(p("missing.ts")));
    }

    #[test]
    fn close_active_falls_back_to_previous() {
        let mut stack = TabStack::new();
        stack.open("a.ts", false);
        stack.open("b.ts", false);
        stack.open("c.ts", false);
        assert!(stack.close(p("c.ts")));
        assert_eq!(stack.active(), Some(p("b.ts")));
    }

    #[test]
    fn close_earlier_tab_keeps_active() {
        let mut stack = TabStack::new();
        stack.open("a.ts", false);
        stack.open("b.ts", false);
        stack.open("c.ts", false);
        assert!(stack.close(p("a.ts")));
        assert_eq!(stack.active(), Some(p("c.ts")));
        assert_eq!(stack.active_index(), Some(1));
    }

    #[test]
    fn close_first_active_tab_selects_next() {
        let mut stack = TabStack::new();
        stack.open("a.ts", false);
        stack.open("b.ts", false);
        stack.set_active(p("a.ts"));
        assert!(stack.close(p("a.ts")));
        assert_eq!(stack.active(), Some(p("b.ts")));
    }

    #[test]
    fn close_last_tab_empties_stack() {
        let mut stack = TabStack::new();
        stack.open("a.ts", false);
        assert!(stack.close(p("a.ts")));
        assert!(stack.is_empty());
        assert_eq!(stack.active(), None);
        assert!(!stack.close(p("a.ts")));
    }

    #[test]
    fn set_active_by_path() {
        let mut stack = TabStack::new();
        stack.open("a.ts", false);
        stack.open("b.ts", false);
        assert!(stack.set_active(p("a.ts")));
        assert_eq!(stack.active(), Some(p("a.ts")));
        assert!(!stack.set_active(p("missing.ts")));
    }

    #[test]
    fn serialization_roundtrip() {
        let mut stack = TabStack::new();
        stack.open("a.ts", false);
        stack.open("b.graphql", true);
        let json = serde_json::to_string(&stack).unwrap();
        let restored: TabStack = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.active(), Some(p("b.graphql")));
        assert_eq!(restored.preview_tab(), Some(p("b.graphql")));
    }
}
