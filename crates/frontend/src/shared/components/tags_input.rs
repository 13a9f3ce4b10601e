//! Free-text tag input used for the keywords field.

use leptos::prelude::*;

/// Splits free text into tags: comma-separated pieces, trimmed, empty
/// pieces dropped.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tag input bound to a list signal.
///
/// Enter or comma commits the pending text; pasting comma-separated text
/// commits one tag per piece; Backspace on an empty field removes the last
/// tag. Duplicates are skipped.
#[component]
pub fn TagsInput(
    /// Committed tags.
    value: RwSignal<Vec<String>>,
    #[prop(optional)] placeholder: Option<String>,
) -> impl IntoView {
    let pending = RwSignal::new(String::new());

    let commit_pending = move || {
        let tags = parse_keywords(&pending.get_untracked());
        if tags.is_empty() {
            pending.set(String::new());
            return;
        }
        value.update(|existing| {
            for tag in tags {
                if !existing.contains(&tag) {
                    existing.push(tag);
                }
            }
        });
        pending.set(String::new());
    };

    view! {
        <div class="tags-input">
            <For each=move || value.get() key=|tag| tag.clone() let:tag>
                {
                    let removed = tag.clone();
                    view! {
                        <span class="tags-input__tag">
                            {tag.clone()}
                            <button
                                type="button"
                                class="tags-input__remove"
                                on:click=move |_| {
                                    value.update(|tags| tags.retain(|t| t != &removed));
                                }
                            >
                                "\u{00d7}"
                            </button>
                        </span>
                    }
                }
            </For>
            <input
                class="tags-input__field"
                prop:value=pending
                placeholder=placeholder.unwrap_or_default()
                on:input=move |ev| pending.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    let key = ev.key();
                    if key == "Enter" || key == "," {
                        ev.prevent_default();
                        commit_pending();
                    } else if key == "Backspace" && pending.get_untracked().is_empty() {
                        value.update(|tags| {
                            tags.pop();
                        });
                    }
                }
                on:blur=move |_| commit_pending()
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords_splits_on_commas() {
        assert_eq!(
            parse_keywords("seo, rust,editor"),
            vec!["seo".to_string(), "rust".to_string(), "editor".to_string()]
        );
    }

    #[test]
    fn test_parse_keywords_drops_empty_pieces() {
        assert_eq!(parse_keywords(",a,, b ,"), vec!["a".to_string(), "b".to_string()]);
        assert!(parse_keywords("").is_empty());
        assert!(parse_keywords(" , ,").is_empty());
    }

    #[test]
    fn test_parse_keywords_single_word() {
        assert_eq!(parse_keywords("  marketing "), vec!["marketing".to_string()]);
    }
}
