//! Transaction authorization engine
//!
//! This module provides the TransactionEngine that decides, command by
//! command, whether a requested action is accepted. It coordinates the
//! Session, the AccountStore and the pending TransactionLog.
//!
//! Every handler follows the same order:
//! 1. Session guard (logged in, admin where required)
//! 2. Referenced accounts exist (and are active where funds move)
//! 3. Names and amounts are well formed
//! 4. Standard-mode ceilings
//! 5. Record the transaction(s)
//!
//! A rejected command changes nothing: transactions are only registered once
//! every check has passed.

use crate::config::FrontEndConfig;
use crate::core::account_store::AccountStore;
use crate::core::session::{Mode, Session};
use crate::core::transaction_log::TransactionLog;
use crate::core::validator::{normalize_account_number, parse_amount, valid_mode, valid_name};
use crate::types::{
    Account, Command, CommandKind, FrontEndError, Transaction, TransactionCode,
};
use rust_decimal::Decimal;
use std::fmt;

/// Standard-mode ceiling for withdrawals (500.00)
pub const STANDARD_WITHDRAWAL_LIMIT: Decimal = Decimal::from_parts(50_000, 0, 0, false, 2);

/// Standard-mode ceiling for transfers, bill payments and deposits (1000.00)
pub const STANDARD_TRANSFER_LIMIT: Decimal = Decimal::from_parts(100_000, 0, 0, false, 2);

/// Companies that accept bill payments
pub const COMPANIES: [&str; 3] = ["EC", "CQ", "TV"];

/// User name of an admin session when none is given
pub const DEFAULT_ADMIN_USER: &str = "Admin";

/// Largest amount a session may move with one transaction of type `code`
///
/// Admin sessions have no ceilings.
pub fn ceiling(mode: Mode, code: TransactionCode) -> Option<Decimal> {
    match (mode, code) {
        (Mode::Admin, _) => None,
        (Mode::Standard, TransactionCode::Withdrawal) => Some(STANDARD_WITHDRAWAL_LIMIT),
        (
            Mode::Standard,
            TransactionCode::Transfer | TransactionCode::Paybill | TransactionCode::Deposit,
        ) => Some(STANDARD_TRANSFER_LIMIT),
        (Mode::Standard, _) => None,
    }
}

/// Successful result of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    LoggedIn { mode: Mode },
    LoggedOut { records: usize },
    Withdrawal,
    Transfer,
    Paybill { company: String },
    Deposit,
    Create,
    Delete,
    Disable,
    ChangePlan,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::LoggedIn { mode } => write!(f, "Accepted {} login.", mode),
            Outcome::LoggedOut { .. } => write!(f, "Session terminated."),
            Outcome::Withdrawal => write!(f, "Withdrawal successful."),
            Outcome::Transfer => write!(f, "Transfer successfully recorded."),
            Outcome::Paybill { company } => {
                write!(f, "Bill payment to {} successfully recorded.", company)
            }
            Outcome::Deposit => write!(f, "Deposit successfully recorded."),
            Outcome::Create => write!(f, "Account creation recorded."),
            Outcome::Delete => write!(f, "Account deletion recorded."),
            Outcome::Disable => write!(f, "Account disabled."),
            Outcome::ChangePlan => write!(f, "Account plan change recorded."),
        }
    }
}

/// Transaction authorization engine
///
/// Owns all state of one terminal: the session, the accounts loaded at login
/// and the transactions approved since. Independent engines share nothing.
pub struct TransactionEngine {
    config: FrontEndConfig,
    session: Session,
    accounts: AccountStore,
    log: TransactionLog,
}

impl TransactionEngine {
    /// Create a logged-out engine
    pub fn new(config: FrontEndConfig) -> Self {
        TransactionEngine {
            config,
            session: Session::new(),
            accounts: AccountStore::new(),
            log: TransactionLog::new(),
        }
    }

    /// Process a single command
    ///
    /// Routes the command to the handler for its type.
    ///
    /// # Returns
    ///
    /// * `Ok(Outcome)` if the command was accepted
    /// * `Err(FrontEndError)` if it was rejected, or a file operation failed
    ///
    /// # Errors
    ///
    /// Rejections are recoverable. `FileNotFound`, `Io` and `MalformedRecord`
    /// from loading the account file or writing the daily file are fatal
    /// (see [`FrontEndError::is_fatal`]).
    pub fn process(&mut self, command: Command) -> Result<Outcome, FrontEndError> {
        tracing::trace!(command = %command.kind(), "processing command");

        match command {
            Command::Login { mode, name } => self.login(&mode, &name),
            Command::Logout => self.logout(),
            Command::Withdrawal { account, amount } => self.withdrawal(&account, &amount),
            Command::Transfer { from, to, amount } => self.transfer(&from, &to, &amount),
            Command::Paybill {
                account,
                company,
                amount,
            } => self.paybill(&account, &company, &amount),
            Command::Deposit { account, amount } => self.deposit(&account, &amount),
            Command::Create { name, balance } => self.create(&name, &balance),
            Command::Delete { name, account } => self.status_change(
                CommandKind::Delete,
                TransactionCode::Delete,
                Outcome::Delete,
                &name,
                &account,
            ),
            Command::Disable { name, account } => self.status_change(
                CommandKind::Disable,
                TransactionCode::Disable,
                Outcome::Disable,
                &name,
                &account,
            ),
            Command::ChangePlan { name, account } => self.status_change(
                CommandKind::ChangePlan,
                TransactionCode::ChangePlan,
                Outcome::ChangePlan,
                &name,
                &account,
            ),
        }
    }

    /// Session guard for every command but login
    ///
    /// Privileged commands need an admin session.
    fn guard(&self, kind: CommandKind) -> Result<Mode, FrontEndError> {
        self.session.require_login(kind.is_privileged(), kind.name())
    }

    /// Start a session and load the account master file
    ///
    /// Standard sessions need a valid holder name. Admin sessions accept any
    /// name and fall back to `Admin` when it is blank.
    ///
    /// # Errors
    ///
    /// - `AlreadyLoggedIn` if a session is active
    /// - `InvalidMode` for anything but `standard` / `admin`
    /// - `InvalidName` for a bad standard-mode name
    /// - `FileNotFound`, `Io`, `MalformedRecord` (fatal) if the account file
    ///   cannot be loaded
    fn login(&mut self, mode: &str, name: &str) -> Result<Outcome, FrontEndError> {
        if self.session.is_logged_in() {
            return Err(FrontEndError::AlreadyLoggedIn);
        }

        if !valid_mode(mode) {
            return Err(FrontEndError::invalid_mode(mode.trim()));
        }
        let mode: Mode = mode.parse()?;
        let name = name.trim();
        let user = match mode {
            Mode::Standard if !valid_name(name) => return Err(FrontEndError::invalid_name(name)),
            Mode::Standard => name,
            Mode::Admin if name.is_empty() => DEFAULT_ADMIN_USER,
            Mode::Admin => name,
        };

        let count = self.accounts.load(&self.config.accounts_path)?;
        self.session.login(mode, user)?;

        tracing::info!(%mode, user, accounts = count, "session started");
        Ok(Outcome::LoggedIn { mode })
    }

    /// Write the session's transactions and end the session
    ///
    /// # Errors
    ///
    /// - `NotLoggedIn` if there is no session
    /// - `FileNotFound` or `Io` (fatal) if the daily file cannot be written
    fn logout(&mut self) -> Result<Outcome, FrontEndError> {
        self.guard(CommandKind::Logout)?;

        self.log.append_end_of_session();
        let records = self.log.flush(&self.config.transactions_path)?;

        self.session.logout()?;
        self.accounts.clear();

        tracing::info!(records, "session terminated");
        Ok(Outcome::LoggedOut { records })
    }

    /// Withdraw from an active account
    ///
    /// # Errors
    ///
    /// `NotLoggedIn`, `UnknownAccount`, `InactiveAccount`, `InvalidAmount`
    /// (including the 500.00 standard ceiling) or `InsufficientFunds`.
    fn withdrawal(&mut self, account: &str, amount: &str) -> Result<Outcome, FrontEndError> {
        let mode = self.guard(CommandKind::Withdrawal)?;

        let account = active_account(&self.accounts, account)?;
        let amount = checked_amount(mode, TransactionCode::Withdrawal, amount)?;
        check_funds(account, amount)?;

        let tx = Transaction::new(
            TransactionCode::Withdrawal,
            &account.holder,
            &account.number,
            amount,
        );
        self.log.add(tx);
        Ok(Outcome::Withdrawal)
    }

    /// Transfer between two active accounts
    ///
    /// Records one line for the source and one for the destination.
    ///
    /// # Errors
    ///
    /// `NotLoggedIn`, `UnknownAccount`, `InactiveAccount` (either side),
    /// `InvalidAmount` (including the 1000.00 standard ceiling) or
    /// `InsufficientFunds` on the source.
    fn transfer(&mut self, from: &str, to: &str, amount: &str) -> Result<Outcome, FrontEndError> {
        let mode = self.guard(CommandKind::Transfer)?;

        let from = active_account(&self.accounts, from)?;
        let to = active_account(&self.accounts, to)?;
        let amount = checked_amount(mode, TransactionCode::Transfer, amount)?;
        check_funds(from, amount)?;

        let debit = Transaction::new(TransactionCode::Transfer, &from.holder, &from.number, amount);
        let credit = Transaction::new(TransactionCode::Transfer, &to.holder, &to.number, amount);
        self.log.add(debit);
        self.log.add(credit);
        Ok(Outcome::Transfer)
    }

    /// Pay a bill to one of the known companies
    ///
    /// The company code is stored in the record's `misc` field.
    ///
    /// # Errors
    ///
    /// `NotLoggedIn`, `InvalidCompany`, `UnknownAccount`, `InactiveAccount`,
    /// `NotAccountHolder` (standard mode), `InvalidAmount` or
    /// `InsufficientFunds`.
    fn paybill(
        &mut self,
        account: &str,
        company: &str,
        amount: &str,
    ) -> Result<Outcome, FrontEndError> {
        let mode = self.guard(CommandKind::Paybill)?;

        let company = company.trim().to_uppercase();
        if !COMPANIES.contains(&company.as_str()) {
            return Err(FrontEndError::invalid_company(&company));
        }

        let account = active_account(&self.accounts, account)?;
        check_holder(&self.session, account)?;
        let amount = checked_amount(mode, TransactionCode::Paybill, amount)?;
        check_funds(account, amount)?;

        let tx = Transaction::new(
            TransactionCode::Paybill,
            &account.holder,
            &account.number,
            amount,
        )
        .with_misc(company.as_str());
        self.log.add(tx);
        Ok(Outcome::Paybill { company })
    }

    /// Deposit into an active account
    ///
    /// # Errors
    ///
    /// `NotLoggedIn`, `UnknownAccount`, `InactiveAccount`, `NotAccountHolder`
    /// (standard mode) or `InvalidAmount` (including the 1000.00 standard
    /// ceiling).
    fn deposit(&mut self, account: &str, amount: &str) -> Result<Outcome, FrontEndError> {
        let mode = self.guard(CommandKind::Deposit)?;

        let account = active_account(&self.accounts, account)?;
        check_holder(&self.session, account)?;
        let amount = checked_amount(mode, TransactionCode::Deposit, amount)?;

        let tx = Transaction::new(
            TransactionCode::Deposit,
            &account.holder,
            &account.number,
            amount,
        );
        self.log.add(tx);
        Ok(Outcome::Deposit)
    }

    /// Request a new account (admin only)
    ///
    /// The new account has no number yet, so the record carries `00000`.
    ///
    /// # Errors
    ///
    /// `NotLoggedIn`, `InsufficientPrivilege`, `InvalidName`, `DuplicateName`
    /// (an existing holder, or a creation already requested this session) or
    /// `InvalidAmount` for the starting balance.
    fn create(&mut self, name: &str, balance: &str) -> Result<Outcome, FrontEndError> {
        self.guard(CommandKind::Create)?;

        let name = name.trim();
        if !valid_name(name) {
            return Err(FrontEndError::invalid_name(name));
        }

        let requested = self
            .log
            .pending()
            .iter()
            .any(|tx| tx.code == TransactionCode::Create && tx.name == name);
        if self.accounts.contains_holder(name) || requested {
            return Err(FrontEndError::duplicate_name(name));
        }

        let balance = parse_amount(balance)?;

        self.log.add(Transaction::new(
            TransactionCode::Create,
            name,
            crate::types::transaction::NO_ACCOUNT,
            balance,
        ));
        Ok(Outcome::Create)
    }

    /// Delete, disable or change the plan of an account (admin only)
    ///
    /// The three commands share their checks: the account exists, the given
    /// name is its holder, and it is still active.
    ///
    /// # Errors
    ///
    /// `NotLoggedIn`, `InsufficientPrivilege`, `UnknownAccount`,
    /// `NameMismatch` or `InactiveAccount`.
    fn status_change(
        &mut self,
        kind: CommandKind,
        code: TransactionCode,
        outcome: Outcome,
        name: &str,
        account: &str,
    ) -> Result<Outcome, FrontEndError> {
        self.guard(kind)?;

        let account = known_account(&self.accounts, account)?;
        let name = name.trim();
        if account.holder != name {
            return Err(FrontEndError::name_mismatch(name, &account.number));
        }
        if !account.is_active() {
            return Err(FrontEndError::inactive_account(&account.number));
        }

        self.log
            .add(Transaction::new(code, name, &account.number, Decimal::ZERO));
        Ok(outcome)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    /// Transactions approved since login, not yet written
    pub fn pending(&self) -> &[Transaction] {
        self.log.pending()
    }
}

/// Resolve an account number against the store
fn known_account<'a>(accounts: &'a AccountStore, raw: &str) -> Result<&'a Account, FrontEndError> {
    let number = normalize_account_number(raw)?;
    accounts
        .get(&number)
        .ok_or_else(|| FrontEndError::unknown_account(&number))
}

/// Resolve an account number and require the account to be active
fn active_account<'a>(
    accounts: &'a AccountStore,
    raw: &str,
) -> Result<&'a Account, FrontEndError> {
    let account = known_account(accounts, raw)?;
    if !account.is_active() {
        return Err(FrontEndError::inactive_account(&account.number));
    }
    Ok(account)
}

/// Standard users may only address accounts they hold
fn check_holder(session: &Session, account: &Account) -> Result<(), FrontEndError> {
    match session {
        Session::Standard { user } if *user != account.holder => {
            Err(FrontEndError::not_account_holder(user, &account.number))
        }
        _ => Ok(()),
    }
}

/// Parse an amount and apply the session's ceiling for `code`
///
/// The ceiling itself is allowed; anything above is rejected.
fn checked_amount(mode: Mode, code: TransactionCode, raw: &str) -> Result<Decimal, FrontEndError> {
    let amount = parse_amount(raw)?;
    if let Some(limit) = ceiling(mode, code) {
        if amount > limit {
            return Err(FrontEndError::invalid_amount(
                raw.trim(),
                format!("exceeds the {} limit of {}", mode, limit),
            ));
        }
    }
    Ok(amount)
}

fn check_funds(account: &Account, amount: Decimal) -> Result<(), FrontEndError> {
    if amount > account.balance {
        return Err(FrontEndError::insufficient_funds(
            &account.number,
            account.balance,
            amount,
        ));
    }
    Ok(())
}
