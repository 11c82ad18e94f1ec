//! Inline SVG icon set (lucide-style strokes). Pass sizing through
//! `attr:class`.

use leptos::prelude::*;

macro_rules! icon {
    ($(#[$meta:meta])* $name:ident, $body:expr) => {
        $(#[$meta])*
        #[component]
        pub fn $name() -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    inner_html=$body
                ></svg>
            }
        }
    };
}

icon!(Zap, r#"<path d="M13 2 3 14h7l-1 8 10-12h-7l1-8z"/>"#);
icon!(Shield, r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>"#);
icon!(
    ShieldCheck,
    r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/><path d="m9 12 2 2 4-4"/>"#
);
icon!(
    Sun,
    r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2m0 16v2M4.93 4.93l1.41 1.41m11.32 11.32 1.41 1.41M2 12h2m16 0h2M4.93 19.07l1.41-1.41m11.32-11.32 1.41-1.41"/>"#
);
icon!(
    HomeIcon,
    r#"<path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><path d="M9 22V12h6v10"/>"#
);
icon!(
    Fence,
    r#"<path d="M4 3 2 5v15h4V5zM10 3 8 5v15h4V5zM16 3l-2 2v15h4V5zM22 5l-2-2v17h2z"/>"#
);
icon!(
    Wrench,
    r#"<path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94z"/>"#
);
icon!(
    SettingsIcon,
    r#"<circle cx="12" cy="12" r="3"/><path d="M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09a1.65 1.65 0 0 0-1-1.51 1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09a1.65 1.65 0 0 0 1.51-1 1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06a1.65 1.65 0 0 0 1.82.33h.09a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51h.09a1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82v.09a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"/>"#
);
icon!(Plus, r#"<path d="M5 12h14M12 5v14"/>"#);
icon!(X, r#"<path d="M18 6 6 18M6 6l12 12"/>"#);
icon!(Menu, r#"<path d="M4 6h16M4 12h16M4 18h16"/>"#);
icon!(
    Trash2,
    r#"<path d="M3 6h18M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2m3 0v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6h14z"/><path d="M10 11v6M14 11v6"/>"#
);
icon!(
    Edit2,
    r#"<path d="M17 3a2.83 2.83 0 0 1 4 4L7.5 20.5 2 22l1.5-5.5z"/>"#
);
icon!(
    Upload,
    r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="m17 8-5-5-5 5M12 3v12"/>"#
);
icon!(
    Download,
    r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="m7 10 5 5 5-5M12 15V3"/>"#
);
icon!(ArrowLeft, r#"<path d="M19 12H5M12 19l-7-7 7-7"/>"#);
icon!(
    Star,
    r#"<path d="m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z"/>"#
);
icon!(
    Package,
    r#"<path d="m7.5 4.27 9 5.15"/><path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/><path d="m3.3 7 8.7 5 8.7-5M12 22V12"/>"#
);
icon!(
    ImageIcon,
    r#"<rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="9" cy="9" r="2"/><path d="m21 15-3.09-3.09a2 2 0 0 0-2.82 0L6 21"/>"#
);
icon!(
    Film,
    r#"<rect x="2" y="2" width="20" height="20" rx="2.18"/><path d="M7 2v20M17 2v20M2 12h20M2 7h5M2 17h5M17 17h5M17 7h5"/>"#
);
icon!(
    LayoutDashboard,
    r#"<rect x="3" y="3" width="7" height="9" rx="1"/><rect x="14" y="3" width="7" height="5" rx="1"/><rect x="14" y="12" width="7" height="9" rx="1"/><rect x="3" y="16" width="7" height="5" rx="1"/>"#
);
icon!(
    Tags,
    r#"<path d="m9 5 10.59 10.59a2 2 0 0 1 0 2.82l-3.18 3.18a2 2 0 0 1-2.82 0L3 11V5a2 2 0 0 1 2-2h4z"/><circle cx="7.5" cy="7.5" r="1"/>"#
);
icon!(
    LogOut,
    r#"<path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/><path d="m16 17 5-5-5-5M21 12H9"/>"#
);
icon!(
    Lock,
    r#"<rect x="3" y="11" width="18" height="11" rx="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#
);
icon!(
    CheckCircle,
    r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><path d="m9 11 3 3L22 4"/>"#
);
icon!(
    AlertCircle,
    r#"<circle cx="12" cy="12" r="10"/><path d="M12 8v4M12 16h.01"/>"#
);
icon!(
    MessageCircle,
    r#"<path d="M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8z"/>"#
);
icon!(
    Phone,
    r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.12.81.3 1.6.54 2.36a2 2 0 0 1-.45 2.11L8 9.39a16 16 0 0 0 6.59 6.59l1.2-1.2a2 2 0 0 1 2.11-.45c.76.24 1.55.42 2.36.54A2 2 0 0 1 22 16.92z"/>"#
);
icon!(
    Mail,
    r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-10 6L2 7"/>"#
);
icon!(
    MapPin,
    r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z"/><circle cx="12" cy="10" r="3"/>"#
);
icon!(Send, r#"<path d="m22 2-7 20-4-9-9-4z"/><path d="M22 2 11 13"/>"#);

/// Resolves a service's symbolic icon name to a rendered icon. Unknown
/// names fall back to the generic gear.
pub fn service_icon(name: &str) -> AnyView {
    match name {
        "Zap" => view! { <Zap attr:class="h-8 w-8" /> }.into_any(),
        "Shield" => view! { <Shield attr:class="h-8 w-8" /> }.into_any(),
        "Sun" => view! { <Sun attr:class="h-8 w-8" /> }.into_any(),
        "Home" => view! { <HomeIcon attr:class="h-8 w-8" /> }.into_any(),
        "Fence" => view! { <Fence attr:class="h-8 w-8" /> }.into_any(),
        "Wrench" => view! { <Wrench attr:class="h-8 w-8" /> }.into_any(),
        _ => view! { <SettingsIcon attr:class="h-8 w-8" /> }.into_any(),
    }
}
