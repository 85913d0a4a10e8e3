//! Static name tables for the rc script language.
//!
//! Membership is advisory: the parser never rejects a statement
//! because a command or setting name is missing from these tables.

use std::fmt;

use serde::Serialize;

/// Ex-command names exported by the extension.
pub const COMMANDS: &[&str] = &[
    "addJump", "addTabHistory", "addTridactylEditorClass", "apropos", "autocmd",
    "autocmddelete", "autocontain", "back", "bind", "bindshow", "bindurl", "bindwizard",
    "blacklistadd", "bmark", "bmarks", "buildFilterConfigs", "changelistjump",
    "clearsearchhighlight", "clipboard", "colourscheme", "comclear", "command", "composite",
    "containerclose", "containercreate", "containerdelete", "containerupdate", "credits",
    "cssparse", "curJumps", "curTabHistory", "drawingerasertoggle", "drawingstart", "echo",
    "editor", "elementunhide", "escapehatch", "exclaim", "exclaim_quiet", "extoptions",
    "fillcmdline", "fillcmdline_nofocus", "fillcmdline_notrail", "fillcmdline_tmp",
    "fillinput", "find", "findnext", "findselect", "firefoxsyncpull", "firefoxsyncpush",
    "fixamo", "fixamo_quiet", "focusbyid", "focusinput", "followpage", "forward",
    "fullscreen", "get", "getAutocmdEvents", "getclip", "getGotoSelectors", "getinput",
    "getInput", "getInputSelector", "getJumpPageId", "getNativeVersion", "getRssLinks",
    "geturlsforlinks", "gobble", "goto", "guiset", "guiset_quiet", "help", "hidecmdline",
    "hint", "home", "issue", "js", "jsb", "jsonview", "jsua", "jumble", "jumpnext",
    "jumpprev", "keyfeed", "keymap", "loadaucmds", "loadtheme", "markadd", "markaddglobal",
    "markaddlocal", "markjump", "markjumpbefore", "markjumpglobal", "markjumplocal",
    "mktridactylrc", "mode", "mouse_mode", "mute", "native", "nativeinstall", "nativeopen",
    "neo_mouse_mode", "nmode", "no_mouse_mode", "open", "open_quiet", "perfdump",
    "perfhistogram", "pied_piper_mouse_mode", "pin", "proxyadd", "proxyremove", "qall",
    "quickmark", "reader", "readerold", "readerurl", "recontain", "reload", "reloadall",
    "reloadallbut", "reloaddead", "reloadhard", "removepref", "removeTridactylEditorClass",
    "repeat", "reset", "reseturl", "restart", "rot13", "rssexec", "run_exstr", "sanitise",
    "saveas", "saveJumps", "saveTabHistory", "scrollline", "scrollpage", "scrollpx",
    "scrolltab", "scrollto", "searchsetkeyword", "set", "setContentStateGroup", "setmode",
    "setnull", "setpref", "seturl", "shellescape", "showcmdline", "sidebaropen",
    "sidebartoggle", "sleep", "snow_mouse_mode", "source", "source_quiet", "tab", "taball",
    "tabaudio", "tabclose", "tabcloseallto", "tabcurrentrename", "tabdetach", "tabduplicate",
    "tabgrab", "tab_helper", "tabmove", "tabnext", "tabnext_gt", "tabonly", "tabopen",
    "tabopen_helper", "tabopenwait", "tabprev", "tabpush", "tabqueue", "tabrename",
    "tabsort", "text2qr", "tgroupabort", "tgroupclose", "tgroupcreate", "tgrouplast",
    "tgroupmove", "tgrouprename", "tgroupswitch", "ttscontrol", "ttsread", "ttsvoices",
    "tutor", "unbind", "unbindurl", "undo", "unfocus", "unloadtheme", "unset", "unsetmode",
    "unseturl", "updatecheck", "updatenative", "url2args", "urlincrement", "urlmodify",
    "urlmodify_js", "urlparent", "urlroot", "version", "viewconfig", "viewcontainers",
    "viewsource", "winclose", "winmerge", "winopen", "wintitle", "yank", "yankimage", "zoom",
];

/// Setting names accepted by `set`.
pub const SETTINGS: &[&str] = &[
    "superignore", "leavegithubalone", "blacklistkeys", "usekeytranslatemap",
    "keyboardlayoutforce", "keyboardlayoutbase", "noproxy", "autocontainmode", "viewsource",
    "homepages", "hintfiltermode", "hintnames", "hintuppercase", "hintshift",
    "hintautoselect", "allowautofocus", "preventautofocusjackhammer", "smoothscroll",
    "tabopenpos", "tabclosepinned", "tabsort", "relatedopenpos", "gimode", "cursorpos",
    "modeindicator", "modeindicatormodes", "logging", "noiframe", "noiframeon", "yankto",
    "putfrom", "downloadsskiphistory", "tabopencontaineraware", "containerindicator",
    "auconcreatecontainer", "tabshowhidden", "findcase", "incsearch", "csp", "perfcounters",
    "modeindicatorshowkeys", "urlparenttrailingslash", "urlparentignorefragment",
    "urlparentignoresearch", "visualenterauto", "visualexitauto", "escapehatchsidebarhack",
    "readerurlintitle",
];

/// Event names accepted by `autocmd`.
pub const EVENTS: &[&str] = &[
    "DocStart",
    "DocLoad",
    "DocEnd",
    "TriStart",
    "TabEnter",
    "TabLeft",
    "FullscreenChange",
    "FullscreenEnter",
    "FullscreenLeft",
    "UriChange",
    "HistoryState",
];

/// Mode names accepted after `--mode=`.
pub const MODES: &[&str] = &[
    "normal", "ignore", "insert", "input", "ex", "hint", "visual", "browser",
];

#[must_use]
pub fn is_known_command(name: &str) -> bool {
    COMMANDS.contains(&name)
}

#[must_use]
pub fn is_known_setting(name: &str) -> bool {
    SETTINGS.contains(&name)
}

#[must_use]
pub fn is_known_event(name: &str) -> bool {
    AutocmdEvent::from_name(name).is_some()
}

#[must_use]
pub fn is_known_mode(name: &str) -> bool {
    BindMode::from_name(name).is_some()
}

/// Mode a binding is scoped to. Absent means the default mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BindMode {
    Normal,
    Ignore,
    Insert,
    Input,
    Ex,
    Hint,
    Visual,
    Browser,
}

impl BindMode {
    pub const ALL: [Self; 8] = [
        Self::Normal,
        Self::Ignore,
        Self::Insert,
        Self::Input,
        Self::Ex,
        Self::Hint,
        Self::Visual,
        Self::Browser,
    ];

    /// Look up a mode by its exact, case-sensitive name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == name)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Ignore => "ignore",
            Self::Insert => "insert",
            Self::Input => "input",
            Self::Ex => "ex",
            Self::Hint => "hint",
            Self::Visual => "visual",
            Self::Browser => "browser",
        }
    }
}

impl fmt::Display for BindMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Browser event an `autocmd` fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AutocmdEvent {
    DocStart,
    DocLoad,
    DocEnd,
    TriStart,
    TabEnter,
    TabLeft,
    FullscreenChange,
    FullscreenEnter,
    FullscreenLeft,
    UriChange,
    HistoryState,
}

impl AutocmdEvent {
    pub const ALL: [Self; 11] = [
        Self::DocStart,
        Self::DocLoad,
        Self::DocEnd,
        Self::TriStart,
        Self::TabEnter,
        Self::TabLeft,
        Self::FullscreenChange,
        Self::FullscreenEnter,
        Self::FullscreenLeft,
        Self::UriChange,
        Self::HistoryState,
    ];

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.as_str() == name)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DocStart => "DocStart",
            Self::DocLoad => "DocLoad",
            Self::DocEnd => "DocEnd",
            Self::TriStart => "TriStart",
            Self::TabEnter => "TabEnter",
            Self::TabLeft => "TabLeft",
            Self::FullscreenChange => "FullscreenChange",
            Self::FullscreenEnter => "FullscreenEnter",
            Self::FullscreenLeft => "FullscreenLeft",
            Self::UriChange => "UriChange",
            Self::HistoryState => "HistoryState",
        }
    }
}

impl fmt::Display for AutocmdEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
