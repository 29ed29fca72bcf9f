//! Enumeration of the keyboard-focusable descendants of a container.

use super::host::DialogHost;

/// Element shapes that can take keyboard focus.
enum FocusableShape {
    Tag(&'static str),
    /// Tag that is only interactive when the attribute is present.
    TagWithAttr(&'static str, &'static str),
    /// Any element carrying the attribute.
    Attr(&'static str),
    /// Any element with an explicit `tabindex` other than `-1`.
    ExplicitTabIndex,
}

const FOCUSABLE_SHAPES: &[FocusableShape] = &[
    FocusableShape::TagWithAttr("a", "href"),
    FocusableShape::TagWithAttr("audio", "controls"),
    FocusableShape::Tag("button"),
    FocusableShape::Tag("details"),
    FocusableShape::Tag("dialog"),
    FocusableShape::Tag("embed"),
    FocusableShape::Tag("iframe"),
    FocusableShape::Tag("input"),
    FocusableShape::Tag("object"),
    FocusableShape::Tag("select"),
    FocusableShape::Tag("summary"),
    FocusableShape::Tag("textarea"),
    FocusableShape::TagWithAttr("video", "controls"),
    FocusableShape::Attr("contenteditable"),
    FocusableShape::ExplicitTabIndex,
];

fn matches_shape<H: DialogHost>(host: &H, node: &H::Node, tag: &str) -> bool {
    FOCUSABLE_SHAPES.iter().any(|shape| match shape {
        FocusableShape::Tag(t) => tag == *t,
        FocusableShape::TagWithAttr(t, attr) => tag == *t && host.attribute(node, attr).is_some(),
        FocusableShape::Attr(attr) => host.attribute(node, attr).is_some(),
        FocusableShape::ExplicitTabIndex => host
            .attribute(node, "tabindex")
            .is_some_and(|value| value.trim() != "-1"),
    })
}

/// Whether `node` passes the focus capability filter.
pub fn is_focusable<H: DialogHost>(host: &H, node: &H::Node) -> bool {
    let tag = host.tag_name(node);
    if !matches_shape(host, node, &tag) {
        return false;
    }
    if host.tab_index(node) < 0 || host.is_hidden(node) {
        return false;
    }
    let flagged = |name: &str| host.attribute(node, name).as_deref() == Some("true");
    if flagged("aria-disabled") || flagged("aria-hidden") {
        return false;
    }
    host.attribute(node, "disabled").is_none()
}

/// Focusable descendants of `container` in document order.
///
/// Always computed from the live tree. An empty result is a normal answer.
pub fn focusable_elements<H: DialogHost>(host: &H, container: &H::Node) -> Vec<H::Node> {
    host.descendants(container)
        .into_iter()
        .filter(|node| is_focusable(host, node))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::modal::test_host::MemoryHost;

    #[test]
    fn test_collects_interactive_elements_in_document_order() {
        let host = MemoryHost::new();
        let container = host.append(host.body(), "div");
        let button = host.append(container, "button");
        let wrapper = host.append(container, "p");
        let link = host.append_with(wrapper, "a", &[("href", "/docs")]);
        let input = host.append(container, "input");
        let editable = host.append_with(container, "div", &[("contenteditable", "true")]);
        let custom = host.append_with(container, "span", &[("tabindex", "0")]);

        assert_eq!(
            focusable_elements(&host, &container),
            vec![button, link, input, editable, custom]
        );
    }

    #[test]
    fn test_skips_shapes_that_are_not_interactive() {
        let host = MemoryHost::new();
        let container = host.append(host.body(), "div");
        host.append(container, "a");
        host.append(container, "video");
        host.append(container, "span");
        host.append_with(container, "div", &[("tabindex", "-1")]);

        assert!(focusable_elements(&host, &container).is_empty());
    }

    #[test]
    fn test_capability_filter() {
        let host = MemoryHost::new();
        let container = host.append(host.body(), "div");
        host.append_with(container, "button", &[("disabled", "")]);
        host.append_with(container, "button", &[("aria-disabled", "true")]);
        host.append_with(container, "button", &[("aria-hidden", "true")]);
        host.append_with(container, "input", &[("tabindex", "-1")]);
        let hidden = host.append(container, "button");
        host.set_hidden(hidden, true);
        let kept = host.append_with(container, "button", &[("aria-disabled", "false")]);

        assert_eq!(focusable_elements(&host, &container), vec![kept]);
    }

    #[test]
    fn test_reflects_live_tree() {
        let host = MemoryHost::new();
        let container = host.append(host.body(), "div");
        let first = host.append(container, "button");
        assert_eq!(focusable_elements(&host, &container), vec![first]);

        let second = host.append(container, "textarea");
        assert_eq!(focusable_elements(&host, &container), vec![first, second]);

        host.detach(first);
        assert_eq!(focusable_elements(&host, &container), vec![second]);
    }

    #[test]
    fn test_container_itself_is_excluded() {
        let host = MemoryHost::new();
        let container = host.append_with(host.body(), "div", &[("tabindex", "0")]);
        assert!(focusable_elements(&host, &container).is_empty());
    }
}
