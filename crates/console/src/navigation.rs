//! Navigation state: the active module, the side panel and the theme.
//!
//! State is an immutable value; every change goes through [`reduce`].

use serde::Serialize;

use industrialerp_core::coded_enum;

/// The five pages of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModuleId {
    #[default]
    Dashboard,
    Purchases,
    Sales,
    Inventory,
    Reports,
}

coded_enum!(ModuleId, "module", {
    Dashboard => "dashboard",
    Purchases => "purchases",
    Sales => "sales",
    Inventory => "inventory",
    Reports => "reports",
});

impl ModuleId {
    /// Label shown in the side panel.
    pub fn label(self) -> &'static str {
        match self {
            ModuleId::Dashboard => "Dashboard",
            ModuleId::Purchases => "Compras",
            ModuleId::Sales => "Ventas",
            ModuleId::Inventory => "Inventario",
            ModuleId::Reports => "Reportes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

coded_enum!(Theme, "theme", {
    Light => "light",
    Dark => "dark",
});

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NavigationState {
    pub active: ModuleId,
    pub collapsed: bool,
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Select(ModuleId),
    ToggleCollapsed,
    SetCollapsed(bool),
    ToggleTheme,
}

/// Next navigation state. Every action is accepted from every state.
pub fn reduce(state: NavigationState, action: NavAction) -> NavigationState {
    match action {
        NavAction::Select(module) => NavigationState {
            active: module,
            ..state
        },
        NavAction::ToggleCollapsed => NavigationState {
            collapsed: !state.collapsed,
            ..state
        },
        NavAction::SetCollapsed(collapsed) => NavigationState { collapsed, ..state },
        NavAction::ToggleTheme => NavigationState {
            theme: state.theme.toggled(),
            ..state
        },
    }
}

impl NavigationState {
    /// Fold a sequence of actions over `self`.
    pub fn apply_all(self, actions: impl IntoIterator<Item = NavAction>) -> Self {
        actions.into_iter().fold(self, reduce)
    }
}
