//! Chat header component.

use crate::directory::Organization;
use crate::ui::components::{BadgeVariant, badge, organization_avatar};
use crate::ui::escape;
use crate::ui::format::capitalize;

/// Chat header with the organization's name, verification and presence.
pub fn render_header(org: &Organization) -> String {
    let verified = if org.verified {
        badge(BadgeVariant::Secondary, "text-xs", "Verified")
    } else {
        String::new()
    };
    let avatar = organization_avatar(
        org.logo.as_deref(),
        &format!("{} logo", org.name),
        "w-10 h-10 rounded-xl",
        "bg-gradient-to-r from-orange-500 to-orange-600",
        "w-5 h-5 text-white",
    );

    format!(
        r#"<header id="chat-header" class="flex items-center gap-3 px-6 py-4 border-b border-gray-200/60 bg-white/80 backdrop-blur-sm">
{avatar}
<div class="flex-1 min-w-0">
<div class="flex items-center gap-2"><h2 class="font-semibold text-gray-900 truncate">{name}</h2>{verified}</div>
<div class="flex items-center gap-1.5 text-xs text-gray-500"><span class="w-2 h-2 bg-green-400 rounded-full"></span><span>{category} • Online</span></div>
</div>
</header>"#,
        name = escape(&org.name),
        category = escape(&capitalize(&org.category)),
    )
}
