//! The ARIA role type.
//!
//! Every valid WAI-ARIA role as a closed enum, with exact-match
//! conversion to and from the canonical token.

use std::fmt;
use std::str::FromStr;

use crate::InvalidRole;

/// A valid WAI-ARIA role.
///
/// The set is closed: 69 roles, spelled exactly as WAI-ARIA spells
/// them. Conversions are byte-exact; `"Button"` is not a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Alert,
    AlertDialog,
    Application,
    Article,
    Banner,
    Button,
    Cell,
    Checkbox,
    ColumnHeader,
    Combobox,
    Complementary,
    ContentInfo,
    Definition,
    Dialog,
    Directory,
    Document,
    Feed,
    Figure,
    Form,
    Grid,
    GridCell,
    Group,
    Heading,
    Img,
    Link,
    List,
    Listbox,
    ListItem,
    Log,
    Main,
    Marquee,
    Math,
    Menu,
    MenuBar,
    MenuItem,
    MenuItemCheckbox,
    MenuItemRadio,
    Navigation,
    None,
    Note,
    Option,
    Presentation,
    ProgressBar,
    Radio,
    RadioGroup,
    Region,
    Row,
    RowGroup,
    RowHeader,
    ScrollBar,
    Search,
    SearchBox,
    Separator,
    Slider,
    SpinButton,
    Status,
    Switch,
    Tab,
    Table,
    TabList,
    TabPanel,
    Term,
    TextBox,
    Timer,
    Toolbar,
    ToolTip,
    Tree,
    TreeGrid,
    TreeItem,
}

impl Role {
    /// Every valid role, in ascending name order.
    pub const ALL: [Role; 69] = [
        Role::Alert,
        Role::AlertDialog,
        Role::Application,
        Role::Article,
        Role::Banner,
        Role::Button,
        Role::Cell,
        Role::Checkbox,
        Role::ColumnHeader,
        Role::Combobox,
        Role::Complementary,
        Role::ContentInfo,
        Role::Definition,
        Role::Dialog,
        Role::Directory,
        Role::Document,
        Role::Feed,
        Role::Figure,
        Role::Form,
        Role::Grid,
        Role::GridCell,
        Role::Group,
        Role::Heading,
        Role::Img,
        Role::Link,
        Role::List,
        Role::Listbox,
        Role::ListItem,
        Role::Log,
        Role::Main,
        Role::Marquee,
        Role::Math,
        Role::Menu,
        Role::MenuBar,
        Role::MenuItem,
        Role::MenuItemCheckbox,
        Role::MenuItemRadio,
        Role::Navigation,
        Role::None,
        Role::Note,
        Role::Option,
        Role::Presentation,
        Role::ProgressBar,
        Role::Radio,
        Role::RadioGroup,
        Role::Region,
        Role::Row,
        Role::RowGroup,
        Role::RowHeader,
        Role::ScrollBar,
        Role::Search,
        Role::SearchBox,
        Role::Separator,
        Role::Slider,
        Role::SpinButton,
        Role::Status,
        Role::Switch,
        Role::Tab,
        Role::Table,
        Role::TabList,
        Role::TabPanel,
        Role::Term,
        Role::TextBox,
        Role::Timer,
        Role::Toolbar,
        Role::ToolTip,
        Role::Tree,
        Role::TreeGrid,
        Role::TreeItem,
    ];

    /// The canonical token for this role, as written in markup.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::AlertDialog => "alertdialog",
            Self::Application => "application",
            Self::Article => "article",
            Self::Banner => "banner",
            Self::Button => "button",
            Self::Cell => "cell",
            Self::Checkbox => "checkbox",
            Self::ColumnHeader => "columnheader",
            Self::Combobox => "combobox",
            Self::Complementary => "complementary",
            Self::ContentInfo => "contentinfo",
            Self::Definition => "definition",
            Self::Dialog => "dialog",
            Self::Directory => "directory",
            Self::Document => "document",
            Self::Feed => "feed",
            Self::Figure => "figure",
            Self::Form => "form",
            Self::Grid => "grid",
            Self::GridCell => "gridcell",
            Self::Group => "group",
            Self::Heading => "heading",
            Self::Img => "img",
            Self::Link => "link",
            Self::List => "list",
            Self::Listbox => "listbox",
            Self::ListItem => "listitem",
            Self::Log => "log",
            Self::Main => "main",
            Self::Marquee => "marquee",
            Self::Math => "math",
            Self::Menu => "menu",
            Self::MenuBar => "menubar",
            Self::MenuItem => "menuitem",
            Self::MenuItemCheckbox => "menuitemcheckbox",
            Self::MenuItemRadio => "menuitemradio",
            Self::Navigation => "navigation",
            Self::None => "none",
            Self::Note => "note",
            Self::Option => "option",
            Self::Presentation => "presentation",
            Self::ProgressBar => "progressbar",
            Self::Radio => "radio",
            Self::RadioGroup => "radiogroup",
            Self::Region => "region",
            Self::Row => "row",
            Self::RowGroup => "rowgroup",
            Self::RowHeader => "rowheader",
            Self::ScrollBar => "scrollbar",
            Self::Search => "search",
            Self::SearchBox => "searchbox",
            Self::Separator => "separator",
            Self::Slider => "slider",
            Self::SpinButton => "spinbutton",
            Self::Status => "status",
            Self::Switch => "switch",
            Self::Tab => "tab",
            Self::Table => "table",
            Self::TabList => "tablist",
            Self::TabPanel => "tabpanel",
            Self::Term => "term",
            Self::TextBox => "textbox",
            Self::Timer => "timer",
            Self::Toolbar => "toolbar",
            Self::ToolTip => "tooltip",
            Self::Tree => "tree",
            Self::TreeGrid => "treegrid",
            Self::TreeItem => "treeitem",
        }
    }

    /// Parse a role token.
    ///
    /// Matching is byte-exact: no case folding, no trimming.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "alert" => Self::Alert,
            "alertdialog" => Self::AlertDialog,
            "application" => Self::Application,
            "article" => Self::Article,
            "banner" => Self::Banner,
            "button" => Self::Button,
            "cell" => Self::Cell,
            "checkbox" => Self::Checkbox,
            "columnheader" => Self::ColumnHeader,
            "combobox" => Self::Combobox,
            "complementary" => Self::Complementary,
            "contentinfo" => Self::ContentInfo,
            "definition" => Self::Definition,
            "dialog" => Self::Dialog,
            "directory" => Self::Directory,
            "document" => Self::Document,
            "feed" => Self::Feed,
            "figure" => Self::Figure,
            "form" => Self::Form,
            "grid" => Self::Grid,
            "gridcell" => Self::GridCell,
            "group" => Self::Group,
            "heading" => Self::Heading,
            "img" => Self::Img,
            "link" => Self::Link,
            "list" => Self::List,
            "listbox" => Self::Listbox,
            "listitem" => Self::ListItem,
            "log" => Self::Log,
            "main" => Self::Main,
            "marquee" => Self::Marquee,
            "math" => Self::Math,
            "menu" => Self::Menu,
            "menubar" => Self::MenuBar,
            "menuitem" => Self::MenuItem,
            "menuitemcheckbox" => Self::MenuItemCheckbox,
            "menuitemradio" => Self::MenuItemRadio,
            "navigation" => Self::Navigation,
            "none" => Self::None,
            "note" => Self::Note,
            "option" => Self::Option,
            "presentation" => Self::Presentation,
            "progressbar" => Self::ProgressBar,
            "radio" => Self::Radio,
            "radiogroup" => Self::RadioGroup,
            "region" => Self::Region,
            "row" => Self::Row,
            "rowgroup" => Self::RowGroup,
            "rowheader" => Self::RowHeader,
            "scrollbar" => Self::ScrollBar,
            "search" => Self::Search,
            "searchbox" => Self::SearchBox,
            "separator" => Self::Separator,
            "slider" => Self::Slider,
            "spinbutton" => Self::SpinButton,
            "status" => Self::Status,
            "switch" => Self::Switch,
            "tab" => Self::Tab,
            "table" => Self::Table,
            "tablist" => Self::TabList,
            "tabpanel" => Self::TabPanel,
            "term" => Self::Term,
            "textbox" => Self::TextBox,
            "timer" => Self::Timer,
            "toolbar" => Self::Toolbar,
            "tooltip" => Self::ToolTip,
            "tree" => Self::Tree,
            "treegrid" => Self::TreeGrid,
            "treeitem" => Self::TreeItem,
            _ => return None,
        })
    }

    /// Resolve a raw `role` attribute value.
    ///
    /// The attribute may carry a space-separated token list; the first
    /// valid token wins. Returns `None` when no token is a role.
    pub fn from_attribute(value: &str) -> Option<Self> {
        for token in value.split_ascii_whitespace() {
            if let Some(role) = Self::from_name(token) {
                return Some(role);
            }
            tracing::trace!("ignoring unknown role token: {:?}", token);
        }
        None
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| InvalidRole(s.to_string()))
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::Role;

    /// Roles serialize as their canonical token so documents carry
    /// `"button"` rather than a variant name.
    impl Serialize for Role {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for Role {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct RoleVisitor;

            impl de::Visitor<'_> for RoleVisitor {
                type Value = Role;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str("a WAI-ARIA role name")
                }

                fn visit_str<E>(self, value: &str) -> Result<Role, E>
                where
                    E: de::Error,
                {
                    Role::from_name(value)
                        .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }

            deserializer.deserialize_str(RoleVisitor)
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_role_json_round_trip() {
        let json = serde_json::to_string(&Role::Button).unwrap();
        assert_eq!(json, "\"button\"");
        let role: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(role, Role::Button);
    }

    #[test]
    fn test_unknown_role_fails_to_deserialize() {
        assert!(serde_json::from_str::<Role>("\"fake-role\"").is_err());
        assert!(serde_json::from_str::<Role>("\"Button\"").is_err());
    }
}
