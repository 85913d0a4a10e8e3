use crate::ast::{
    Alias, Autocmd, AutocmdAction, Autocontain, Binding, CommandDef, Comment, ContainFlag,
    ExCommand, Key, Node, Program, Quickmark, Setting, SettingValue, Statement, Unbinding,
};
use crate::tables::{AutocmdEvent, BindMode};
use crate::token::Span;

impl Program {
    /// Create a new empty program.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// Append a statement node. Built statements carry no tokens and a
    /// default span; parse the formatted text to get real locations.
    #[must_use]
    pub fn statement(mut self, node: Node) -> Self {
        self.statements.push(Statement {
            span: Span::default(),
            tokens: Vec::new(),
            node,
        });
        self
    }

    /// Add a `"` comment line.
    #[must_use]
    pub fn comment(self, text: &str) -> Self {
        self.statement(Node::Comment(Comment {
            text: format!(" {text}"),
        }))
    }

    /// Add an empty line.
    #[must_use]
    pub fn blank(self) -> Self {
        self.statement(Node::Blank)
    }

    /// Add `alias name expansion...`.
    #[must_use]
    pub fn alias(self, name: &str, expansion: &[&str]) -> Self {
        self.statement(Node::Alias(Alias {
            name: name.to_string(),
            expansion: expansion.iter().map(ToString::to_string).collect(),
        }))
    }

    /// Add a binding in the default mode.
    #[must_use]
    pub fn bind(self, key: Key, excmd: ExCommand) -> Self {
        self.statement(Node::Binding(Binding {
            mode: None,
            key,
            excmd,
        }))
    }

    /// Add a binding scoped to `mode`.
    #[must_use]
    pub fn bind_in(self, mode: BindMode, key: Key, excmd: ExCommand) -> Self {
        self.statement(Node::Binding(Binding {
            mode: Some(mode),
            key,
            excmd,
        }))
    }

    /// Add `unbind [--mode=m] key`.
    #[must_use]
    pub fn unbind(self, mode: Option<BindMode>, key: Key) -> Self {
        self.statement(Node::Unbinding(Unbinding { mode, key }))
    }

    /// Add `command name excmd`.
    #[must_use]
    pub fn command(self, name: &str, excmd: ExCommand) -> Self {
        self.statement(Node::CommandDef(CommandDef {
            name: name.to_string(),
            excmd,
        }))
    }

    /// Add a bare ex-command line.
    #[must_use]
    pub fn excmd(self, excmd: ExCommand) -> Self {
        self.statement(Node::ExCommand(excmd))
    }

    /// Add an autocmd running an ex-command.
    #[must_use]
    pub fn autocmd(self, event: AutocmdEvent, pattern: &str, excmd: ExCommand) -> Self {
        self.statement(Node::Autocmd(Autocmd {
            event,
            pattern: pattern.to_string(),
            action: AutocmdAction::ExCommand(excmd),
        }))
    }

    /// Add an autocmd running an alias.
    #[must_use]
    pub fn autocmd_alias(self, event: AutocmdEvent, pattern: &str, alias: &str) -> Self {
        self.statement(Node::Autocmd(Autocmd {
            event,
            pattern: pattern.to_string(),
            action: AutocmdAction::Alias(alias.to_string()),
        }))
    }

    /// Add `autocontain -s domain container`.
    #[must_use]
    pub fn autocontain_domain(self, domain: &str, container: &str) -> Self {
        self.autocontain(ContainFlag::Sane, domain, container)
    }

    /// Add `autocontain -u url container`.
    #[must_use]
    pub fn autocontain_url(self, url: &str, container: &str) -> Self {
        self.autocontain(ContainFlag::Url, url, container)
    }

    fn autocontain(self, flag: ContainFlag, pattern: &str, container: &str) -> Self {
        self.statement(Node::Autocontain(Autocontain {
            flag,
            pattern: pattern.to_string(),
            container: container.to_string(),
        }))
    }

    /// Add `quickmark key url`.
    #[must_use]
    pub fn quickmark(self, key: char, url: &str) -> Self {
        self.statement(Node::Quickmark(Quickmark {
            key,
            url: url.to_string(),
        }))
    }

    /// Add `set name values...`. All-digit values become numbers.
    #[must_use]
    pub fn set(self, name: &str, values: &[&str]) -> Self {
        let values = values
            .iter()
            .map(|v| {
                if !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()) {
                    SettingValue::Number((*v).to_string())
                } else {
                    SettingValue::Word((*v).to_string())
                }
            })
            .collect();
        self.statement(Node::Setting(Setting {
            name: name.to_string(),
            values,
        }))
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl ExCommand {
    /// Create an ex-command with no arguments.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            args: None,
        }
    }

    /// Append an argument, space-separated from any earlier ones.
    #[must_use]
    pub fn arg(mut self, value: &str) -> Self {
        self.args = Some(match self.args.take() {
            Some(args) => format!("{args} {value}"),
            None => value.to_string(),
        });
        self
    }
}

impl Key {
    #[must_use]
    pub const fn single(key: char) -> Self {
        Self::Single(key)
    }

    /// `<C-key>`
    #[must_use]
    pub const fn ctrl(key: char) -> Self {
        Self::Compound { modifier: 'C', key }
    }

    /// `<A-key>`
    #[must_use]
    pub const fn alt(key: char) -> Self {
        Self::Compound { modifier: 'A', key }
    }

    /// `<M-key>`
    #[must_use]
    pub const fn meta(key: char) -> Self {
        Self::Compound { modifier: 'M', key }
    }
}
