//! Role-specific theme helpers for consistent styling across pages.

use crate::domain::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Accent {
    Sky,
    Violet,
    Emerald,
    Indigo,
}

fn accent(role: &Role) -> Accent {
    match role {
        Role::Pricing => Accent::Sky,
        Role::Admin => Accent::Violet,
        Role::Vendedor => Accent::Emerald,
        Role::None | Role::Other(_) => Accent::Indigo,
    }
}

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(role: &Role) -> &'static str {
    match accent(role) {
        Accent::Sky => "rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400 disabled:opacity-50",
        Accent::Violet => "rounded-lg bg-violet-500 px-4 py-2 text-sm font-semibold text-white hover:bg-violet-400 disabled:opacity-50",
        Accent::Emerald => "rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-400 disabled:opacity-50",
        Accent::Indigo => "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400 disabled:opacity-50",
    }
}

/// Outline button; same for every role.
pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-slate-700 px-4 py-2 text-sm text-slate-300 hover:border-slate-500 hover:text-white disabled:opacity-50"
}

pub fn btn_danger() -> &'static str {
    "rounded px-2 py-1 text-xs font-semibold text-rose-300 border border-rose-500/40 hover:bg-rose-500/20 disabled:opacity-50"
}

pub fn btn_small_active(role: &Role) -> &'static str {
    match accent(role) {
        Accent::Sky => "rounded px-2 py-1 text-xs font-semibold bg-sky-500/20 text-sky-300 border border-sky-500/40",
        Accent::Violet => "rounded px-2 py-1 text-xs font-semibold bg-violet-500/20 text-violet-300 border border-violet-500/40",
        Accent::Emerald => "rounded px-2 py-1 text-xs font-semibold bg-emerald-500/20 text-emerald-300 border border-emerald-500/40",
        Accent::Indigo => "rounded px-2 py-1 text-xs font-semibold bg-indigo-500/20 text-indigo-300 border border-indigo-500/40",
    }
}

pub fn btn_small_inactive(role: &Role) -> &'static str {
    match accent(role) {
        Accent::Sky => "rounded px-2 py-1 text-xs text-slate-500 border border-slate-700 hover:border-sky-600 hover:text-sky-300",
        Accent::Violet => "rounded px-2 py-1 text-xs text-slate-500 border border-slate-700 hover:border-violet-600 hover:text-violet-300",
        Accent::Emerald => "rounded px-2 py-1 text-xs text-slate-500 border border-slate-700 hover:border-emerald-600 hover:text-emerald-300",
        Accent::Indigo => "rounded px-2 py-1 text-xs text-slate-500 border border-slate-700 hover:border-slate-600 hover:text-slate-300",
    }
}

pub fn nav_button(role: &Role, active: bool) -> &'static str {
    match (accent(role), active) {
        (Accent::Sky, true) => "rounded-lg border border-sky-500/60 bg-sky-500/15 px-4 py-2 font-semibold text-sky-300",
        (Accent::Violet, true) => "rounded-lg border border-violet-500/60 bg-violet-500/15 px-4 py-2 font-semibold text-violet-300",
        (Accent::Emerald, true) => "rounded-lg border border-emerald-500/60 bg-emerald-500/15 px-4 py-2 font-semibold text-emerald-300",
        (Accent::Indigo, true) => "rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300",
        (_, false) => "rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200",
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(role: &Role) -> &'static str {
    match accent(role) {
        Accent::Sky => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none",
        Accent::Violet => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-violet-500 focus:outline-none",
        Accent::Emerald => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
        Accent::Indigo => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
    }
}

// ============================================
// PANEL / TABLE STYLES
// ============================================

pub fn panel_border(role: &Role) -> &'static str {
    match accent(role) {
        Accent::Sky => "rounded-xl border border-sky-800/50 bg-slate-900/40",
        Accent::Violet => "rounded-xl border border-violet-800/50 bg-slate-900/40",
        Accent::Emerald => "rounded-xl border border-emerald-800/50 bg-slate-900/40",
        Accent::Indigo => "rounded-xl border border-slate-800 bg-slate-900/40",
    }
}

pub fn table_container(role: &Role) -> &'static str {
    match accent(role) {
        Accent::Sky => "quote-table rounded-xl border border-sky-900/40 bg-slate-900/40 overflow-hidden",
        Accent::Violet => "quote-table rounded-xl border border-violet-900/40 bg-slate-900/40 overflow-hidden",
        Accent::Emerald => "quote-table rounded-xl border border-emerald-900/40 bg-slate-900/40 overflow-hidden",
        Accent::Indigo => "quote-table rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden",
    }
}

pub fn table_header(role: &Role) -> &'static str {
    match accent(role) {
        Accent::Sky => "border-b border-sky-900/40 bg-sky-950/30 text-xs uppercase text-sky-400/70",
        Accent::Violet => "border-b border-violet-900/40 bg-violet-950/30 text-xs uppercase text-violet-400/70",
        Accent::Emerald => "border-b border-emerald-900/40 bg-emerald-950/30 text-xs uppercase text-emerald-400/70",
        Accent::Indigo => "border-b border-slate-800 bg-slate-900/60 text-xs uppercase text-slate-500",
    }
}

pub fn table_divider() -> &'static str {
    "divide-y divide-slate-800"
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_primary(role: &Role) -> &'static str {
    match accent(role) {
        Accent::Sky => "text-sky-300",
        Accent::Violet => "text-violet-300",
        Accent::Emerald => "text-emerald-300",
        Accent::Indigo => "text-indigo-300",
    }
}

pub fn text_muted() -> &'static str {
    "text-slate-500"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_roles_share_the_neutral_palette() {
        let auditor = Role::Other("AUDITOR".into());
        assert_eq!(btn_primary(&auditor), btn_primary(&Role::None));
        assert_ne!(btn_primary(&Role::Pricing), btn_primary(&Role::Admin));
        assert_eq!(nav_button(&Role::Admin, false), nav_button(&Role::Pricing, false));
    }
}
