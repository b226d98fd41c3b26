//! Client-side behavior emitted with the page.

use vitrine_core::TiltSettings;

/// Attach pointer tilt listeners to every element matching `selector`.
///
/// Same geometry as [`crate::Tilt`].
pub fn tilt_script(settings: &TiltSettings, selector: &str) -> String {
    format!(
        r#"<script>
(function () {{
    document.querySelectorAll({selector}).forEach(function (card) {{
        card.addEventListener('mousemove', function (e) {{
            var rect = card.getBoundingClientRect();
            var rotateX = ((e.clientY - rect.top) - rect.height / 2) / {divisor};
            var rotateY = (rect.width / 2 - (e.clientX - rect.left)) / {divisor};
            card.style.transform = 'perspective({perspective}px) rotateX(' + rotateX + 'deg) rotateY(' + rotateY + 'deg) translateY(-{lift}px)';
        }});
        card.addEventListener('mouseleave', function () {{
            card.style.transform = 'perspective({perspective}px) rotateX(0) rotateY(0) translateY(0)';
        }});
    }});
}})();
</script>"#,
        selector = js_string(selector),
        divisor = settings.divisor,
        perspective = settings.perspective_px,
        lift = settings.lift_px,
    )
}

/// `value` as a JavaScript string literal that is safe inside a `<script>` element.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string().replace("</", "<\\/")
}

/// Mobile navigation open/close.
pub fn navigation_script() -> &'static str {
    r#"<script>
(function () {
    var menu = document.getElementById('nav-menu');
    var open = document.getElementById('nav-toggle');
    var close = document.getElementById('nav-close');
    if (!menu) return;
    function setOpen(isOpen) {
        menu.classList.toggle('active', isOpen);
        document.body.style.overflow = isOpen ? 'hidden' : 'auto';
    }
    if (open) open.addEventListener('click', function () { setOpen(true); });
    if (close) close.addEventListener('click', function () { setOpen(false); });
    document.querySelectorAll('.nav-link').forEach(function (link) {
        link.addEventListener('click', function () { setOpen(false); });
    });
})();
</script>"#
}

/// Hide the preloader `delay_ms` after the window load event.
pub fn preloader_script(delay_ms: u32) -> String {
    format!(
        r#"<script>
window.addEventListener('load', function () {{
    setTimeout(function () {{
        var preloader = document.getElementById('preloader');
        if (preloader) preloader.classList.add('hidden');
    }}, {delay_ms});
}});
</script>"#,
        delay_ms = delay_ms
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_script_uses_settings() {
        let settings = TiltSettings {
            perspective_px: 800.0,
            divisor: 25.0,
            lift_px: 4.0,
        };
        let script = tilt_script(&settings, ".category-card");
        assert!(script.contains(r#"querySelectorAll(".category-card")"#));
        assert!(script.contains("/ 25;"));
        assert!(script.contains("perspective(800px)"));
        assert!(script.contains("translateY(-4px)"));
    }

    #[test]
    fn test_tilt_selector_is_a_js_string() {
        let script = tilt_script(&TiltSettings::default(), "a\u{7}\"b</script>");
        assert!(script.contains(r#"querySelectorAll("a\u0007\"b<\/script>")"#));
        assert_eq!(script.matches("</script>").count(), 1);
        assert!(!script.contains("\\u{"));
    }

    #[test]
    fn test_preloader_delay() {
        assert!(preloader_script(1000).contains("}, 1000);"));
    }
}
