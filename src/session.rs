use std::io::Write;

use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::domain::{Account, AccountError, Clock, Error, LineSource};
use crate::input::Prompter;

pub const APP_TITLE: &str = "ATM Console";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckBalance,
    Deposit,
    Withdraw,
    MiniStatement,
    ChangePin,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::CheckBalance,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::MiniStatement,
        MenuChoice::ChangePin,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> i32 {
        match self {
            MenuChoice::CheckBalance => 1,
            MenuChoice::Deposit => 2,
            MenuChoice::Withdraw => 3,
            MenuChoice::MiniStatement => 4,
            MenuChoice::ChangePin => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::CheckBalance => "Check Balance",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::MiniStatement => "Mini Statement",
            MenuChoice::ChangePin => "Change PIN",
            MenuChoice::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose Exit from the menu.
    Exited,
    /// PIN attempts ran out before the menu was reached.
    LockedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
    Terminated(SessionEnd),
}

/// Drives one interactive session: account setup, login, then the menu loop.
#[derive(Debug)]
pub struct Session<I, W>
where
    I: LineSource,
    W: Write,
{
    prompter: Prompter<I, W>,
    config: SessionConfig,
}

impl<I, W> Session<I, W>
where
    I: LineSource,
    W: Write,
{
    pub fn new(input: I, output: W, config: SessionConfig) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            config,
        }
    }

    pub fn banner(&mut self) -> Result<(), Error> {
        self.prompter.header(APP_TITLE)
    }

    pub fn farewell(&mut self) -> Result<(), Error> {
        self.prompter
            .say(format_args!("\nThank you for using {}.", APP_TITLE))
    }

    pub fn open_account<C: Clock>(&mut self, clock: C) -> Result<Account<C>, Error> {
        self.prompter.say("Create your account to begin.")?;
        let holder = self.prompter.read_holder_name("Account holder name: ")?;
        let pin = self.prompter.read_pin("Set a 4-digit PIN: ")?;
        let opening_balance = self.prompter.read_amount("Enter opening balance: ")?;

        Ok(Account::open(holder, pin, opening_balance, clock)?)
    }

    /// Runs until the user exits or is locked out. Only input/output failures
    /// end the session early.
    pub fn run<C: Clock>(&mut self, account: &mut Account<C>) -> Result<SessionEnd, Error> {
        let mut state = SessionState::Unauthenticated;

        loop {
            state = match state {
                SessionState::Unauthenticated => self.authenticate(account)?,
                SessionState::Authenticated => self.serve_menu(account)?,
                SessionState::Terminated(end) => {
                    info!(?end, "session terminated");
                    return Ok(end);
                }
            };
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn authenticate<C: Clock>(&mut self, account: &mut Account<C>) -> Result<SessionState, Error> {
        let max_attempts = self.config.max_pin_attempts;

        for attempt in 1..=max_attempts {
            let candidate = self.prompter.read_pin("Enter your PIN: ")?;
            if account.check_pin(&candidate) {
                self.prompter
                    .say(format_args!("\nWelcome, {}.", account.holder_name()))?;
                account.record_login();
                info!(attempt, "user logged in");
                return Ok(SessionState::Authenticated);
            }

            let remaining = max_attempts - attempt;
            warn!(attempt, remaining, "incorrect pin");
            if remaining > 0 {
                self.prompter
                    .say(format_args!("Incorrect PIN. Attempts remaining: {}", remaining))?;
            }
        }

        warn!(max_attempts, "pin attempts exhausted");
        self.prompter
            .say("Too many failed attempts. Session terminated.")?;
        Ok(SessionState::Terminated(SessionEnd::LockedOut))
    }

    fn serve_menu<C: Clock>(&mut self, account: &mut Account<C>) -> Result<SessionState, Error> {
        self.print_menu()?;
        let number = self.prompter.read_int_in_range(
            "Choose an option: ",
            1,
            MenuChoice::ALL.len() as i32,
        )?;
        let choice = MenuChoice::ALL[(number - 1) as usize];
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::CheckBalance => self.show_balance(account)?,
            MenuChoice::Deposit => self.deposit(account)?,
            MenuChoice::Withdraw => self.withdraw(account)?,
            MenuChoice::MiniStatement => self.print_mini_statement(account)?,
            MenuChoice::ChangePin => self.change_pin(account)?,
            MenuChoice::Exit => return Ok(SessionState::Terminated(SessionEnd::Exited)),
        }

        Ok(SessionState::Authenticated)
    }

    fn print_menu(&mut self) -> Result<(), Error> {
        self.prompter.header("Main Menu")?;
        for choice in MenuChoice::ALL {
            self.prompter
                .say(format_args!("{}. {}", choice.number(), choice.label()))?;
        }
        Ok(())
    }

    fn show_balance<C: Clock>(&mut self, account: &Account<C>) -> Result<(), Error> {
        self.prompter
            .say(format_args!("Current balance: ${}", account.balance()))
    }

    fn deposit<C: Clock>(&mut self, account: &mut Account<C>) -> Result<(), Error> {
        let amount = self.prompter.read_amount("Enter deposit amount: ")?;
        match account.deposit(amount) {
            Ok(balance) => self
                .prompter
                .say(format_args!("Deposit successful. New balance: ${}", balance)),
            Err(e) => self.prompter.say(e),
        }
    }

    fn withdraw<C: Clock>(&mut self, account: &mut Account<C>) -> Result<(), Error> {
        let amount = self.prompter.read_amount("Enter withdrawal amount: ")?;
        match account.withdraw(amount) {
            Ok(balance) => {
                self.prompter.say("Please collect your cash.")?;
                self.prompter.say(format_args!("New balance: ${}", balance))
            }
            Err(e @ AccountError::InsufficientFunds { requested, available }) => {
                debug!(%requested, %available, "insufficient funds");
                self.prompter.say(e)
            }
            Err(e) => {
                warn!(error = %e, "withdrawal failed");
                self.prompter.say(e)
            }
        }
    }

    fn print_mini_statement<C: Clock>(&mut self, account: &Account<C>) -> Result<(), Error> {
        self.prompter.header("Mini Statement")?;
        if account.transactions().is_empty() {
            self.prompter.say("No transactions yet.")?;
        } else {
            for entry in account.transactions() {
                self.prompter.say(entry)?;
            }
        }
        self.prompter
            .say(format_args!("Available balance: ${}", account.balance()))
    }

    fn change_pin<C: Clock>(&mut self, account: &mut Account<C>) -> Result<(), Error> {
        let current = self.prompter.read_pin("Enter current PIN: ")?;
        if !account.check_pin(&current) {
            warn!("pin change refused, current pin did not match");
            return self.prompter.say("Current PIN does not match.");
        }

        let new_pin = self.prompter.read_pin("Enter new 4-digit PIN: ")?;
        account.set_pin(new_pin);
        self.prompter.say("PIN changed successfully.")
    }
}
