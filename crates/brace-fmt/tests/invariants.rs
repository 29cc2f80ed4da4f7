use brace_fmt::{format_source, options::Options};
use proptest::prelude::*;

fn no_adjacent_whitespace_tokens(state: &brace_fmt::FormatterState) -> bool {
    state.tokens().windows(2).all(|w| !(w[0].is_whitespace() && w[1].is_whitespace()))
}

proptest! {
    #[test]
    fn formatting_twice_is_a_fixpoint(src in "[a-zA-Z0-9 \t\n(){}\\[\\];:,.]{0,200}") {
        let once = format_source(&src, Options::default());
        let twice = format_source(&once, Options::default());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn formatting_never_leaves_adjacent_whitespace(src in "[a-zA-Z0-9 \t\n(){}\\[\\];:,.]{0,200}") {
        let mut options = Options::default();
        options.fragment = true;
        let state = brace_fmt::format_tokens(&src, options);
        prop_assert!(no_adjacent_whitespace_tokens(&state));
    }
}
