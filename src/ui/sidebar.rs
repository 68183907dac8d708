//! Sidebar: tabs, search, organization cards and chat history items.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::components::{
    BadgeVariant, ButtonProps, ButtonSize, ButtonVariant, InputProps, badge, building_icon,
    button, card, clock_icon, filter_icon, input, message_square_icon, organization_avatar,
    plus_icon, scroll_area, search_icon,
};
use super::format::{capitalize, relative_time, unread_label};
use super::{escape, session_base};
use crate::directory::{ChatHistory, Directory, Organization};
use crate::filter::{filter_chats, filter_organizations};

/// Which list the sidebar shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarTab {
    #[default]
    Organizations,
    Chats,
}

impl SidebarTab {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Organizations => "organizations",
            Self::Chats => "chats",
        }
    }
}

/// Everything the sidebar needs to render.
#[derive(Debug, Clone, Copy)]
pub struct SidebarView<'a> {
    pub session_id: &'a str,
    pub directory: &'a Directory,
    pub tab: SidebarTab,
    pub query: &'a str,
    pub selected_organization: Option<&'a str>,
    pub selected_chat: Option<&'a str>,
    pub now: DateTime<Utc>,
}

const TAB_BASE: &str = "flex-1 flex items-center justify-center gap-2 px-4 py-2.5 rounded-xl \
                        text-sm font-medium transition-all duration-300 relative";
const TAB_ACTIVE: &str = "bg-white text-gray-900 shadow-sm shadow-gray-900/10";
const TAB_IDLE: &str = "text-gray-500 hover:text-gray-700 hover:bg-white/50";

/// Full sidebar, swapped as a whole when the tab changes.
pub fn render_sidebar(view: &SidebarView<'_>) -> String {
    let base = session_base(view.session_id);
    let unread = view.directory.total_unread();

    let unread_badge = if unread > 0 {
        badge(
            BadgeVariant::Default,
            "absolute -top-1 -right-1 h-5 min-w-5 p-0 border-2 border-white",
            &unread_label(unread),
        )
    } else {
        String::new()
    };

    let tab_button = |tab: SidebarTab, icon: String, label: &str, extra: &str| {
        let state = if view.tab == tab { TAB_ACTIVE } else { TAB_IDLE };
        format!(
            r##"<button type="button" class="{TAB_BASE} {state}" hx-get="{base}/sidebar?tab={}" hx-include="#sidebar-search" hx-target="#sidebar" hx-swap="outerHTML">{icon}{label}{extra}</button>"##,
            tab.as_str()
        )
    };

    let placeholder = match view.tab {
        SidebarTab::Organizations => "Search agents...",
        SidebarTab::Chats => "Search conversations...",
    };
    let search_attrs = format!(
        r##"hx-get="{base}/sidebar/results" hx-trigger="input" hx-target="#sidebar-results" hx-swap="outerHTML" hx-include="#sidebar-tab""##
    );
    let search = input(&InputProps {
        input_type: "search",
        name: "q",
        id: "sidebar-search",
        placeholder,
        value: view.query,
        class: "pl-10 pr-4 h-11 bg-gray-50/80 border-gray-200/60 rounded-2xl \
                focus:bg-white focus:border-orange-300 focus:ring-2 focus:ring-orange-200",
        attrs: &search_attrs,
    });

    let filter_button = button(
        &ButtonProps {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Icon,
            class: "w-11 h-11 rounded-2xl text-gray-400",
            ..ButtonProps::default()
        },
        &filter_icon(""),
    );

    let new_chat = if view.tab == SidebarTab::Chats {
        let attrs = format!(
            r##"hx-post="{base}/new-chat" hx-target="#chat-area" hx-swap="innerHTML" hx-include="#sidebar-search, #sidebar-tab""##
        );
        button(
            &ButtonProps {
                class: "w-full h-11 rounded-2xl shadow-lg shadow-orange-500/25",
                attrs: &attrs,
                ..ButtonProps::default()
            },
            &format!("{}Start New Conversation", plus_icon("mr-2")),
        )
    } else {
        String::new()
    };

    format!(
        r#"<aside id="sidebar" class="w-96 bg-white/80 backdrop-blur-xl border-r border-gray-200/50 flex flex-col shadow-xl shadow-gray-900/5">
<div class="p-6 border-b border-gray-100/80">
<div class="flex items-center gap-3 mb-6">
<div class="w-10 h-10 rounded-2xl bg-gradient-to-br from-orange-500 via-orange-600 to-orange-700 flex items-center justify-center shadow-lg shadow-orange-500/30">{logo}</div>
<div><h1 class="text-xl font-semibold text-gray-900 tracking-tight">OrgChat</h1><p class="text-xs text-gray-500 font-medium">AI Assistant Network</p></div>
</div>
<div class="flex bg-gray-50/80 rounded-2xl p-1.5 shadow-inner">{orgs_tab}{chats_tab}</div>
</div>
<div class="px-6 py-4 border-b border-gray-100/50">
<input type="hidden" id="sidebar-tab" name="tab" value="{tab}"/>
<div class="flex items-center gap-2 mb-3">
<div class="relative flex-1">{search_icon}{search}</div>
{filter_button}
</div>
{new_chat}
</div>
{results}
</aside>"#,
        logo = message_square_icon("w-5 h-5 text-white"),
        orgs_tab = tab_button(
            SidebarTab::Organizations,
            building_icon(""),
            "Agents",
            ""
        ),
        chats_tab = tab_button(SidebarTab::Chats, clock_icon(""), "Chats", &unread_badge),
        tab = view.tab.as_str(),
        search_icon = search_icon("absolute left-3.5 top-1/2 -translate-y-1/2 text-gray-400"),
        results = render_results(view, false),
    )
}

/// Result list plus footer. With `oob`, marked for an out-of-band swap so it
/// can ride along with a chat-area response.
pub fn render_results(view: &SidebarView<'_>, oob: bool) -> String {
    let (items, count) = match view.tab {
        SidebarTab::Organizations => {
            let orgs = filter_organizations(view.directory.organizations(), view.query);
            let items = if orgs.is_empty() {
                empty_state(
                    &building_icon("w-8 h-8 text-gray-300 mx-auto mb-3"),
                    "No agents found",
                    "Try adjusting your search",
                )
            } else {
                orgs.iter()
                    .map(|org| {
                        organization_card(
                            view.session_id,
                            org,
                            view.selected_organization == Some(org.id.as_str()),
                        )
                    })
                    .collect()
            };
            (items, orgs.len())
        }
        SidebarTab::Chats => {
            let chats = filter_chats(view.directory.chat_histories(), view.query);
            let items = if chats.is_empty() {
                let icon = message_square_icon("w-8 h-8 text-gray-300 mx-auto mb-3");
                if view.directory.chat_histories().is_empty() {
                    empty_state(
                        &icon,
                        "No conversations yet",
                        "Start chatting with an agent to see your history",
                    )
                } else {
                    empty_state(&icon, "No chats found", "Try adjusting your search")
                }
            } else {
                chats
                    .iter()
                    .map(|chat| {
                        chat_history_item(
                            view.session_id,
                            chat,
                            view.selected_chat == Some(chat.id.as_str()),
                            view.now,
                        )
                    })
                    .collect()
            };
            (items, chats.len())
        }
    };

    let oob_attr = if oob { r#" hx-swap-oob="true""# } else { "" };
    let list = scroll_area(
        "h-full",
        "",
        &format!(r#"<div class="p-3 space-y-2">{items}</div>"#),
    );

    format!(
        r#"<div id="sidebar-results" class="flex-1 flex flex-col overflow-hidden"{oob_attr}>
<div class="flex-1 overflow-hidden">{list}</div>
<div class="p-4 border-t border-gray-100/50"><div class="flex items-center justify-between text-xs text-gray-500">
<div class="flex items-center gap-2"><div class="w-2 h-2 bg-green-400 rounded-full shadow-sm shadow-green-400/50"></div><span class="font-medium">All systems operational</span></div>
<div class="flex items-center gap-1"><span id="sidebar-count">{count}</span><span>items</span></div>
</div></div>
</div>"#
    )
}

fn empty_state(icon: &str, title: &str, hint: &str) -> String {
    format!(
        r#"<div class="text-center py-12">{icon}<p class="text-sm text-gray-500">{title}</p><p class="text-xs text-gray-400 mt-1">{hint}</p></div>"#
    )
}

fn selectable_classes(selected: bool) -> &'static str {
    if selected {
        "border-orange-500 shadow-lg shadow-orange-500/25 bg-gradient-to-b from-gray-50 to-gray-100 selected"
    } else {
        "border-gray-200 hover:border-gray-300"
    }
}

/// One organization in the Agents tab.
pub fn organization_card(session_id: &str, org: &Organization, selected: bool) -> String {
    let name = escape(&org.name);
    let verified = if org.verified {
        badge(BadgeVariant::Secondary, "text-xs px-2 py-0.5", "Verified")
    } else {
        String::new()
    };
    let avatar = organization_avatar(
        org.logo.as_deref(),
        &format!("{} logo", org.name),
        "w-12 h-12 rounded-xl",
        "bg-gradient-to-r from-orange-500 to-orange-600",
        "w-6 h-6 text-white",
    );
    let attrs = format!(
        r##"data-organization-id="{}" hx-post="{}/organizations/{}" hx-target="#chat-area" hx-swap="innerHTML" hx-include="#sidebar-search, #sidebar-tab""##,
        escape(&org.id),
        session_base(session_id),
        escape(&org.id),
    );

    card(
        &format!(
            "p-4 cursor-pointer transition-all duration-200 hover:shadow-lg hover:shadow-orange-500/25 {}",
            selectable_classes(selected)
        ),
        &attrs,
        &format!(
            r#"<div class="flex items-start gap-3"><div class="flex-shrink-0">{avatar}</div><div class="flex-1 min-w-0"><div class="flex items-center gap-2 mb-1"><h3 class="font-semibold text-gray-900 text-sm truncate">{name}</h3>{verified}</div><p class="text-xs text-gray-500 mb-2">{category}</p><p class="text-xs text-gray-400 line-clamp-2">{description}</p></div></div>"#,
            category = escape(&capitalize(&org.category)),
            description = escape(&org.description),
        ),
    )
}

/// One chat history in the Chats tab.
pub fn chat_history_item(
    session_id: &str,
    chat: &ChatHistory,
    selected: bool,
    now: DateTime<Utc>,
) -> String {
    let name = escape(&chat.organization_name);
    let avatar = organization_avatar(
        chat.organization_logo.as_deref(),
        &format!("{} logo", chat.organization_name),
        "w-10 h-10 rounded-lg",
        "bg-gray-200",
        "w-5 h-5 text-gray-500",
    );
    let unread = match chat.unread() {
        0 => String::new(),
        n => format!(
            r#"<div class="absolute -top-1 -right-1 w-4 h-4 bg-orange-500 rounded-full flex items-center justify-center"><span class="text-xs text-white font-medium">{}</span></div>"#,
            unread_label(n)
        ),
    };
    let attrs = format!(
        r##"data-chat-id="{}" hx-post="{}/chats/{}" hx-target="#chat-area" hx-swap="innerHTML" hx-include="#sidebar-search, #sidebar-tab""##,
        escape(&chat.id),
        session_base(session_id),
        escape(&chat.id),
    );

    card(
        &format!(
            "p-3 cursor-pointer transition-all duration-200 hover:shadow-sm {}",
            selectable_classes(selected)
        ),
        &attrs,
        &format!(
            r#"<div class="flex items-start gap-3"><div class="flex-shrink-0 relative">{avatar}{unread}</div><div class="flex-1 min-w-0"><div class="flex items-center justify-between mb-1"><h4 class="font-medium text-gray-900 text-sm truncate">{name}</h4><span class="text-xs text-gray-400 flex-shrink-0">{when}</span></div><p class="text-xs text-gray-500 line-clamp-2">{last}</p></div></div>"#,
            when = relative_time(chat.timestamp, now),
            last = escape(&chat.last_message),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view<'a>(directory: &'a Directory, tab: SidebarTab, query: &'a str) -> SidebarView<'a> {
        SidebarView {
            session_id: "s1",
            directory,
            tab,
            query,
            selected_organization: None,
            selected_chat: None,
            now: Utc::now(),
        }
    }

    #[test]
    fn test_organizations_tab_lists_all() {
        let directory = Directory::seeded();
        let html = render_sidebar(&view(&directory, SidebarTab::Organizations, ""));
        assert_eq!(html.matches("data-organization-id=").count(), 8);
        assert!(html.contains("Search agents..."));
        assert!(html.contains(r#"<span id="sidebar-count">8</span>"#));
        assert!(!html.contains("Start New Conversation"));
    }

    #[test]
    fn test_unread_badge_on_chats_tab() {
        let directory = Directory::seeded();
        let html = render_sidebar(&view(&directory, SidebarTab::Organizations, ""));
        assert!(html.contains(">1</span></button>"));
    }

    #[test]
    fn test_chats_tab() {
        let directory = Directory::seeded();
        let html = render_sidebar(&view(&directory, SidebarTab::Chats, ""));
        assert_eq!(html.matches("data-chat-id=").count(), 3);
        assert!(html.contains("Search conversations..."));
        assert!(html.contains("Start New Conversation"));
        assert!(html.contains("30m ago"));
        assert!(html.contains("2h ago"));
        assert!(html.contains("1d ago"));
    }

    #[test]
    fn test_search_narrows_results() {
        let directory = Directory::seeded();
        let html = render_results(&view(&directory, SidebarTab::Organizations, "HOTEL"), false);
        assert_eq!(html.matches("data-organization-id=").count(), 1);
        assert!(html.contains("Grand Plaza Hotel"));
        assert!(html.contains(r#"<span id="sidebar-count">1</span>"#));
    }

    #[test]
    fn test_empty_states() {
        let directory = Directory::seeded();
        let html = render_results(&view(&directory, SidebarTab::Organizations, "zzz"), false);
        assert!(html.contains("No agents found"));

        let html = render_results(&view(&directory, SidebarTab::Chats, "zzz"), false);
        assert!(html.contains("No chats found"));

        let empty = Directory::new(directory.organizations().to_vec(), Vec::new());
        let html = render_results(&view(&empty, SidebarTab::Chats, ""), false);
        assert!(html.contains("No conversations yet"));
    }

    #[test]
    fn test_oob_marker() {
        let directory = Directory::seeded();
        let html = render_results(&view(&directory, SidebarTab::Organizations, ""), true);
        assert!(html.starts_with(r#"<div id="sidebar-results""#));
        assert!(html.contains(r#"hx-swap-oob="true""#));
    }

    #[test]
    fn test_selection_highlight() {
        let directory = Directory::seeded();
        let org = directory.organization("3").unwrap();
        assert!(organization_card("s1", org, true).contains(" selected\""));
        assert!(!organization_card("s1", org, false).contains(" selected\""));
    }

    #[test]
    fn test_card_category_and_endpoint() {
        let directory = Directory::seeded();
        let org = directory.organization("7").unwrap();
        let html = organization_card("s1", org, false);
        assert!(html.contains("Small Business"));
        assert!(html.contains(r#"hx-post="/api/sessions/s1/organizations/7""#));
        assert!(html.contains("Verified"));
    }

    #[test]
    fn test_chat_item_unread_bubble() {
        let directory = Directory::seeded();
        let now = Utc::now();
        let bank = directory.chat_history("chat-2").unwrap();
        assert!(chat_history_item("s1", bank, false, now).contains("text-xs text-white font-medium\">1<"));

        let hotel = directory.chat_history("chat-3").unwrap();
        assert!(!chat_history_item("s1", hotel, false, now).contains("rounded-full flex items-center"));
    }
}
