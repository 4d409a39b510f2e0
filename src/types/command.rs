//! Command schema for the line-oriented input protocol
//!
//! Every command name maps to one `CommandKind`, and every kind declares the
//! argument lines it consumes. The reader always consumes the full arity, even
//! when the command is later rejected, so the input stream stays aligned.

use std::fmt;

/// Closed set of command names accepted by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Login,
    Logout,
    Withdrawal,
    Transfer,
    Paybill,
    Deposit,
    Create,
    Delete,
    Disable,
    ChangePlan,
}

impl CommandKind {
    /// All command kinds, in protocol order
    pub const ALL: [CommandKind; 10] = [
        CommandKind::Login,
        CommandKind::Logout,
        CommandKind::Withdrawal,
        CommandKind::Transfer,
        CommandKind::Paybill,
        CommandKind::Deposit,
        CommandKind::Create,
        CommandKind::Delete,
        CommandKind::Disable,
        CommandKind::ChangePlan,
    ];

    /// Look up a command by its name
    ///
    /// The name is trimmed and matched case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        CommandKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The protocol name of the command
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Login => "login",
            CommandKind::Logout => "logout",
            CommandKind::Withdrawal => "withdrawal",
            CommandKind::Transfer => "transfer",
            CommandKind::Paybill => "paybill",
            CommandKind::Deposit => "deposit",
            CommandKind::Create => "create",
            CommandKind::Delete => "delete",
            CommandKind::Disable => "disable",
            CommandKind::ChangePlan => "changeplan",
        }
    }

    /// Names of the argument lines following the command, in input order
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            CommandKind::Login => &["mode", "name"],
            CommandKind::Logout => &[],
            CommandKind::Withdrawal | CommandKind::Deposit => &["account", "amount"],
            CommandKind::Transfer => &["from account", "to account", "amount"],
            CommandKind::Paybill => &["account", "company", "amount"],
            CommandKind::Create => &["name", "balance"],
            CommandKind::Delete | CommandKind::Disable | CommandKind::ChangePlan => {
                &["name", "account"]
            }
        }
    }

    /// Number of argument lines the command consumes
    pub fn arity(self) -> usize {
        self.fields().len()
    }

    /// Whether the command requires an admin session
    pub fn is_privileged(self) -> bool {
        matches!(
            self,
            CommandKind::Create | CommandKind::Delete | CommandKind::Disable | CommandKind::ChangePlan
        )
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed command with its raw, trimmed argument strings
///
/// Arguments are kept as strings: interpreting them (amounts, account
/// numbers, modes) is part of validation and may fail per command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { mode: String, name: String },
    Logout,
    Withdrawal { account: String, amount: String },
    Transfer { from: String, to: String, amount: String },
    Paybill { account: String, company: String, amount: String },
    Deposit { account: String, amount: String },
    Create { name: String, balance: String },
    Delete { name: String, account: String },
    Disable { name: String, account: String },
    ChangePlan { name: String, account: String },
}

impl Command {
    /// Build a command from its kind and exactly `kind.arity()` arguments
    ///
    /// Returns `None` if the number of arguments does not match the arity.
    pub fn from_parts(kind: CommandKind, args: Vec<String>) -> Option<Self> {
        if args.len() != kind.arity() {
            return None;
        }
        let mut args = args.into_iter();
        let mut next = || args.next().unwrap_or_default();

        let command = match kind {
            CommandKind::Login => Command::Login {
                mode: next(),
                name: next(),
            },
            CommandKind::Logout => Command::Logout,
            CommandKind::Withdrawal => Command::Withdrawal {
                account: next(),
                amount: next(),
            },
            CommandKind::Transfer => Command::Transfer {
                from: next(),
                to: next(),
                amount: next(),
            },
            CommandKind::Paybill => Command::Paybill {
                account: next(),
                company: next(),
                amount: next(),
            },
            CommandKind::Deposit => Command::Deposit {
                account: next(),
                amount: next(),
            },
            CommandKind::Create => Command::Create {
                name: next(),
                balance: next(),
            },
            CommandKind::Delete => Command::Delete {
                name: next(),
                account: next(),
            },
            CommandKind::Disable => Command::Disable {
                name: next(),
                account: next(),
            },
            CommandKind::ChangePlan => Command::ChangePlan {
                name: next(),
                account: next(),
            },
        };
        Some(command)
    }

    /// The kind of this command
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Login { .. } => CommandKind::Login,
            Command::Logout => CommandKind::Logout,
            Command::Withdrawal { .. } => CommandKind::Withdrawal,
            Command::Transfer { .. } => CommandKind::Transfer,
            Command::Paybill { .. } => CommandKind::Paybill,
            Command::Deposit { .. } => CommandKind::Deposit,
            Command::Create { .. } => CommandKind::Create,
            Command::Delete { .. } => CommandKind::Delete,
            Command::Disable { .. } => CommandKind::Disable,
            Command::ChangePlan { .. } => CommandKind::ChangePlan,
        }
    }
}
