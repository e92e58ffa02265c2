//! Role name constants.
//!
//! One constant per role so call sites can write `names::BUTTON`
//! instead of a bare `"button"` literal that a typo would silently
//! break. Each value is derived from [`Role`], never spelled out a
//! second time, so a constant cannot disagree with the registry.

use crate::Role;

pub const ALERT: &str = Role::Alert.as_str();
pub const ALERT_DIALOG: &str = Role::AlertDialog.as_str();
pub const APPLICATION: &str = Role::Application.as_str();
pub const ARTICLE: &str = Role::Article.as_str();
pub const BANNER: &str = Role::Banner.as_str();
pub const BUTTON: &str = Role::Button.as_str();
pub const CELL: &str = Role::Cell.as_str();
pub const CHECKBOX: &str = Role::Checkbox.as_str();
pub const COLUMN_HEADER: &str = Role::ColumnHeader.as_str();
pub const COMBOBOX: &str = Role::Combobox.as_str();
pub const COMPLEMENTARY: &str = Role::Complementary.as_str();
pub const CONTENT_INFO: &str = Role::ContentInfo.as_str();
pub const DEFINITION: &str = Role::Definition.as_str();
pub const DIALOG: &str = Role::Dialog.as_str();
pub const DIRECTORY: &str = Role::Directory.as_str();
pub const DOCUMENT: &str = Role::Document.as_str();
pub const FEED: &str = Role::Feed.as_str();
pub const FIGURE: &str = Role::Figure.as_str();
pub const FORM: &str = Role::Form.as_str();
pub const GRID: &str = Role::Grid.as_str();
pub const GRID_CELL: &str = Role::GridCell.as_str();
pub const GROUP: &str = Role::Group.as_str();
pub const HEADING: &str = Role::Heading.as_str();
pub const IMG: &str = Role::Img.as_str();
pub const LINK: &str = Role::Link.as_str();
pub const LIST: &str = Role::List.as_str();
pub const LISTBOX: &str = Role::Listbox.as_str();
pub const LIST_ITEM: &str = Role::ListItem.as_str();
pub const LOG: &str = Role::Log.as_str();
pub const MAIN: &str = Role::Main.as_str();
pub const MARQUEE: &str = Role::Marquee.as_str();
pub const MATH: &str = Role::Math.as_str();
pub const MENU: &str = Role::Menu.as_str();
pub const MENU_BAR: &str = Role::MenuBar.as_str();
pub const MENU_ITEM: &str = Role::MenuItem.as_str();
pub const MENU_ITEM_CHECKBOX: &str = Role::MenuItemCheckbox.as_str();
pub const MENU_ITEM_RADIO: &str = Role::MenuItemRadio.as_str();
pub const NAVIGATION: &str = Role::Navigation.as_str();
pub const NONE: &str = Role::None.as_str();
pub const NOTE: &str = Role::Note.as_str();
pub const OPTION: &str = Role::Option.as_str();
pub const PRESENTATION: &str = Role::Presentation.as_str();
pub const PROGRESS_BAR: &str = Role::ProgressBar.as_str();
pub const RADIO: &str = Role::Radio.as_str();
pub const RADIO_GROUP: &str = Role::RadioGroup.as_str();
pub const REGION: &str = Role::Region.as_str();
pub const ROW: &str = Role::Row.as_str();
pub const ROW_GROUP: &str = Role::RowGroup.as_str();
pub const ROW_HEADER: &str = Role::RowHeader.as_str();
pub const SCROLL_BAR: &str = Role::ScrollBar.as_str();
pub const SEARCH: &str = Role::Search.as_str();
pub const SEARCH_BOX: &str = Role::SearchBox.as_str();
pub const SEPARATOR: &str = Role::Separator.as_str();
pub const SLIDER: &str = Role::Slider.as_str();
pub const SPIN_BUTTON: &str = Role::SpinButton.as_str();
pub const STATUS: &str = Role::Status.as_str();
pub const SWITCH: &str = Role::Switch.as_str();
pub const TAB: &str = Role::Tab.as_str();
pub const TABLE: &str = Role::Table.as_str();
pub const TAB_LIST: &str = Role::TabList.as_str();
pub const TAB_PANEL: &str = Role::TabPanel.as_str();
pub const TERM: &str = Role::Term.as_str();
pub const TEXT_BOX: &str = Role::TextBox.as_str();
pub const TIMER: &str = Role::Timer.as_str();
pub const TOOLBAR: &str = Role::Toolbar.as_str();
pub const TOOL_TIP: &str = Role::ToolTip.as_str();
pub const TREE: &str = Role::Tree.as_str();
pub const TREE_GRID: &str = Role::TreeGrid.as_str();
pub const TREE_ITEM: &str = Role::TreeItem.as_str();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_identity() {
        assert_eq!(BUTTON, "button");
        assert_eq!(ALERT, "alert");
        assert_eq!(TAB_PANEL, "tabpanel");
        assert_eq!(MENU_ITEM_CHECKBOX, "menuitemcheckbox");
        assert_eq!(CONTENT_INFO, "contentinfo");
    }

    #[test]
    fn test_constants_validate() {
        for name in [ALERT, BUTTON, SWITCH, TAB_PANEL, TREE_ITEM] {
            assert!(crate::is_valid_role(name));
        }
    }
}
