//! Role classification.
//!
//! Groups the registry into the broad WAI-ARIA categories and exposes
//! the predicate helpers assistive plumbing usually wants (is this a
//! landmark? a live region?).

use crate::Role;

/// Broad WAI-ARIA role category.
///
/// Every role belongs to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleCategory {
    /// Page region landmarks (banner, main, navigation, ...).
    Landmark,
    /// Interactive widgets (button, checkbox, slider, ...).
    Widget,
    /// Document structure (article, heading, table, ...).
    DocumentStructure,
    /// Live regions (alert, log, status, ...).
    LiveRegion,
    /// Windows and popups (alertdialog, dialog, tooltip).
    Window,
}

/// Live region politeness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveRegionMode {
    Off,
    Polite,
    Assertive,
}

impl Role {
    /// The category this role belongs to.
    pub fn category(&self) -> RoleCategory {
        match self {
            // Landmark roles
            Self::Banner | Self::Complementary | Self::ContentInfo | Self::Form
            | Self::Main | Self::Navigation | Self::Region | Self::Search => {
                RoleCategory::Landmark
            }

            // Widget roles
            Self::Button | Self::Checkbox | Self::Combobox | Self::Grid
            | Self::GridCell | Self::Link | Self::Listbox | Self::Menu
            | Self::MenuBar | Self::MenuItem | Self::MenuItemCheckbox
            | Self::MenuItemRadio | Self::Option | Self::ProgressBar | Self::Radio
            | Self::RadioGroup | Self::ScrollBar | Self::SearchBox | Self::Slider
            | Self::SpinButton | Self::Switch | Self::Tab | Self::TabList
            | Self::TabPanel | Self::TextBox | Self::Tree | Self::TreeGrid
            | Self::TreeItem => RoleCategory::Widget,

            // Document structure roles
            Self::Application | Self::Article | Self::Cell | Self::ColumnHeader
            | Self::Definition | Self::Directory | Self::Document | Self::Feed
            | Self::Figure | Self::Group | Self::Heading | Self::Img | Self::List
            | Self::ListItem | Self::Math | Self::None | Self::Note
            | Self::Presentation | Self::Row | Self::RowGroup | Self::RowHeader
            | Self::Separator | Self::Table | Self::Term | Self::Toolbar => {
                RoleCategory::DocumentStructure
            }

            // Live region roles
            Self::Alert | Self::Log | Self::Marquee | Self::Status | Self::Timer => {
                RoleCategory::LiveRegion
            }

            // Window roles
            Self::AlertDialog | Self::Dialog | Self::ToolTip => RoleCategory::Window,
        }
    }

    /// Check if role is a landmark
    pub fn is_landmark(&self) -> bool {
        self.category() == RoleCategory::Landmark
    }

    /// Check if role is a widget (interactive)
    pub fn is_widget(&self) -> bool {
        self.category() == RoleCategory::Widget
    }

    /// Check if role is a live region
    pub fn is_live_region(&self) -> bool {
        self.category() == RoleCategory::LiveRegion
    }

    /// Check if role is a window or popup
    pub fn is_window(&self) -> bool {
        self.category() == RoleCategory::Window
    }

    /// Implicit live region politeness for this role.
    ///
    /// Only the live region roles carry one; `alert` interrupts, `log`
    /// and `status` wait for a pause, `marquee` and `timer` default to
    /// off.
    pub fn implicit_live_mode(&self) -> Option<LiveRegionMode> {
        match self {
            Self::Alert => Some(LiveRegionMode::Assertive),
            Self::Log | Self::Status => Some(LiveRegionMode::Polite),
            Self::Marquee | Self::Timer => Some(LiveRegionMode::Off),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_partition() {
        let mut landmark = 0;
        let mut widget = 0;
        let mut structure = 0;
        let mut live = 0;
        let mut window = 0;
        for role in Role::ALL {
            match role.category() {
                RoleCategory::Landmark => landmark += 1,
                RoleCategory::Widget => widget += 1,
                RoleCategory::DocumentStructure => structure += 1,
                RoleCategory::LiveRegion => live += 1,
                RoleCategory::Window => window += 1,
            }
        }
        assert_eq!(landmark, 8);
        assert_eq!(widget, 28);
        assert_eq!(structure, 25);
        assert_eq!(live, 5);
        assert_eq!(window, 3);
    }

    #[test]
    fn test_predicates() {
        assert!(Role::Button.is_widget());
        assert!(Role::Navigation.is_landmark());
        assert!(Role::Alert.is_live_region());
        assert!(Role::Dialog.is_window());
        assert!(!Role::Article.is_widget());
        assert_eq!(Role::Article.category(), RoleCategory::DocumentStructure);
    }

    #[test]
    fn test_implicit_live_mode() {
        assert_eq!(Role::Alert.implicit_live_mode(), Some(LiveRegionMode::Assertive));
        assert_eq!(Role::Log.implicit_live_mode(), Some(LiveRegionMode::Polite));
        assert_eq!(Role::Status.implicit_live_mode(), Some(LiveRegionMode::Polite));
        assert_eq!(Role::Marquee.implicit_live_mode(), Some(LiveRegionMode::Off));
        assert_eq!(Role::Timer.implicit_live_mode(), Some(LiveRegionMode::Off));
        assert_eq!(Role::Button.implicit_live_mode(), None);
    }
}
