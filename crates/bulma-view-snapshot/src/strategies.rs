//! Proptest strategies for normalizer property tests
//!
//! Generates markup that is well formed but written sloppily: mixed name
//! case, every attribute quoting style and arbitrary inter-tag whitespace.

use proptest::prelude::*;

/// Whitespace that may sit between any two nodes
pub fn arb_gap() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        3 => Just(""),
        2 => Just(" "),
        2 => Just("\n"),
        2 => Just("\n    "),
        1 => Just("\n\n\t"),
    ]
}

/// Plain words, never containing markup characters
pub fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 1..4).prop_map(|words| words.join(" "))
}

pub fn arb_tag_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("div"),
        Just("p"),
        Just("span"),
        Just("ul"),
        Just("li"),
        Just("Section"),
        Just("TD"),
    ]
    .prop_map(str::to_string)
}

/// One attribute in double, single, unquoted or bare form
///
/// Quoted values may span lines.
pub fn arb_attribute() -> impl Strategy<Value = String> {
    let tail = prop_oneof![3 => Just(String::new()), 1 => "\n[ ]{0,4}[a-z0-9]{1,6}"];
    ("[a-z]{1,6}", "[a-z0-9]{1,8}", tail, 0..4u8).prop_map(|(name, value, tail, style)| match style {
        0 => format!("{name}=\"{value}{tail}\""),
        1 => format!("{name}='{value}{tail}'"),
        2 => format!("{name}={value}"),
        _ => name,
    })
}

fn arb_leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => arb_text(),
        1 => Just("<br>".to_string()),
        1 => arb_attribute().prop_map(|attr| format!("<input {attr}>")),
        1 => arb_text().prop_map(|text| format!("<!--{text}-->")),
        1 => (arb_gap(), arb_text(), arb_gap(), arb_text())
            .prop_map(|(a, t1, b, t2)| format!("<pre>{a}{t1}{b}{t2}{a}</pre>")),
    ]
}

/// Markup for a sequence of sibling nodes nested up to four levels deep
pub fn arb_markup() -> impl Strategy<Value = String> {
    let node = arb_leaf().prop_recursive(4, 48, 5, |inner| {
        (
            arb_tag_name(),
            prop::collection::vec(arb_attribute(), 0..3),
            prop::collection::vec((arb_gap(), inner), 0..5),
            arb_gap(),
        )
            .prop_map(|(name, attrs, children, trailing)| {
                let mut markup = format!("<{name}");
                for attr in attrs {
                    markup.push(' ');
                    markup.push_str(&attr);
                }
                markup.push('>');
                for (gap, child) in children {
                    markup.push_str(gap);
                    markup.push_str(&child);
                }
                markup.push_str(trailing);
                markup.push_str(&format!("</{}>", name.to_lowercase()));
                markup
            })
    });
    prop::collection::vec((arb_gap(), node), 0..4).prop_map(|nodes| {
        nodes
            .into_iter()
            .map(|(gap, node)| format!("{gap}{node}"))
            .collect()
    })
}
