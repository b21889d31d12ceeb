//! Interactive cart session.
//!
//! A session owns one `CartManager` over an in-memory `Page` for as long as
//! the process runs. Each command is applied, then any new notices and the
//! resulting cart are written to the output.

use std::io::{self, BufRead, Write};

use restaurantly_core::{CartError, CheckoutSummary, OrderReceipt};
use restaurantly_storefront::views::CheckoutView;
use restaurantly_storefront::{CartManager, Overlay, Page, StorefrontConfig, StorefrontError};

use super::menu::Menu;
use super::parse::{Command, HELP, parse_line};

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A cart session writing to `out`.
pub struct Session<W> {
    manager: CartManager<Page>,
    menu: Menu,
    out: W,
}

impl<W: Write> Session<W> {
    #[must_use]
    pub fn new(config: &StorefrontConfig, menu: Menu, out: W) -> Self {
        Self {
            manager: CartManager::new(Page::new(), config),
            menu,
            out,
        }
    }

    #[must_use]
    pub const fn manager(&self) -> &CartManager<Page> {
        &self.manager
    }

    /// Read and run commands until end of input or `quit`.
    ///
    /// With `echo`, each command is written to the output before it runs;
    /// with `prompt`, a prompt is written before each read.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool, echo: bool) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            if echo && !line.trim().is_empty() {
                writeln!(self.out, "> {}", line.trim())?;
            }
            if self.execute_line(&line)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Parse and run one line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute_line(&mut self, line: &str) -> io::Result<Flow> {
        match parse_line(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                writeln!(self.out, "error: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Run one command.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        let outcome = match command {
            Command::Add { name, price, image } => self
                .manager
                .add_to_cart(&name, price, &image)
                .map(|_| Printed::Cart),
            Command::Order { name } => match self.menu.find(&name).cloned() {
                Some(item) => self
                    .manager
                    .add_to_cart(&item.name, item.price, &item.image)
                    .map(|_| Printed::Cart),
                None => {
                    writeln!(self.out, "error: no menu item named `{name}`")?;
                    return Ok(Flow::Continue);
                }
            },
            Command::Quantity { index, delta } => self
                .manager
                .update_quantity(index, delta)
                .map(|_| Printed::Cart),
            Command::Increment { name } => self
                .manager
                .update_quantity_by_name(&name, 1)
                .map(|_| Printed::Cart),
            Command::Decrement { name } => self
                .manager
                .update_quantity_by_name(&name, -1)
                .map(|_| Printed::Cart),
            Command::Remove { name } => self.manager.remove_item(&name).map(|()| Printed::Cart),
            Command::OpenCart => self.manager.open_cart().map(|()| Printed::Cart),
            Command::CloseCart => {
                self.manager.close_cart();
                Ok(Printed::State)
            }
            Command::Checkout => self.manager.checkout().map(Printed::Checkout),
            Command::Confirm { customer } => self
                .manager
                .confirm_checkout_with(customer)
                .map(Printed::Receipt),
            Command::Dismiss => {
                self.manager.close_checkout();
                Ok(Printed::State)
            }
            Command::Show => Ok(Printed::Cart),
            Command::Html { region } => {
                let content = self.manager.surface().region_str(region).to_string();
                writeln!(self.out, "<!-- {} -->", region.selector())?;
                writeln!(self.out, "{content}")?;
                Ok(Printed::Nothing)
            }
            Command::Menu => {
                self.write_menu()?;
                Ok(Printed::Nothing)
            }
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                Ok(Printed::Nothing)
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        self.write_notices()?;
        match outcome {
            Ok(printed) => self.write_outcome(printed)?,
            Err(StorefrontError::Cart(
                CartError::IndexOutOfRange { .. } | CartError::ItemNotFound(_),
            )) => {
                // Rejected quantity changes are no-ops for the visitor.
            }
            Err(StorefrontError::Cart(CartError::EmptyCart)) => {
                // The empty-cart notice has already been written.
            }
            Err(e) => writeln!(self.out, "error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn write_notices(&mut self) -> io::Result<()> {
        let notices: Vec<String> = self.manager.surface_mut().unread_notices().to_vec();
        for notice in notices {
            writeln!(self.out, "! {notice}")?;
        }
        Ok(())
    }

    fn write_outcome(&mut self, printed: Printed) -> io::Result<()> {
        match printed {
            Printed::Cart => self.write_cart(),
            Printed::State => self.write_state(),
            Printed::Checkout(summary) => self.write_checkout(&summary),
            Printed::Receipt(receipt) => self.write_receipt(&receipt),
            Printed::Nothing => Ok(()),
        }
    }

    /// Presentation state followed by the selectors of the open overlays.
    fn write_state(&mut self) -> io::Result<()> {
        let page = self.manager.surface();
        let open: Vec<&str> = Overlay::ALL
            .into_iter()
            .filter(|overlay| page.is_open(*overlay))
            .map(|overlay| overlay.selector())
            .collect();
        if open.is_empty() {
            writeln!(self.out, "[{}]", self.manager.state())
        } else {
            writeln!(self.out, "[{}] {}", self.manager.state(), open.join(" "))
        }
    }

    fn write_cart(&mut self) -> io::Result<()> {
        let view = self.manager.cart_view();
        writeln!(
            self.out,
            "Cart: {} item(s) [{}]",
            view.item_count,
            self.manager.state()
        )?;
        for item in &view.items {
            writeln!(
                self.out,
                "  {}. {} x {} @ {} = {}",
                item.index, item.name, item.quantity, item.unit_price, item.line_total
            )?;
        }
        writeln!(self.out, "  Total: {}", view.total)
    }

    fn write_checkout(&mut self, summary: &CheckoutSummary) -> io::Result<()> {
        let view = CheckoutView::new(summary, self.manager.formatter());
        writeln!(self.out, "Checkout:")?;
        for line in &view.lines {
            writeln!(self.out, "  {line}")?;
        }
        writeln!(self.out, "  Total: {}", view.total)
    }

    fn write_receipt(&mut self, receipt: &OrderReceipt) -> io::Result<()> {
        let formatter = *self.manager.formatter();
        writeln!(
            self.out,
            "Order {} placed at {} for {} ({} item(s))",
            receipt.id,
            receipt.placed_at.format("%Y-%m-%d %H:%M:%S UTC"),
            formatter.format(receipt.total),
            receipt.item_count
        )?;
        if let Some(customer) = &receipt.customer {
            writeln!(
                self.out,
                "  Deliver to {} ({}), {}",
                customer.name, customer.phone, customer.address
            )?;
        }
        match receipt.order_details_json() {
            Ok(json) => writeln!(self.out, "  {json}"),
            Err(e) => writeln!(self.out, "error: {e}"),
        }
    }

    fn write_menu(&mut self) -> io::Result<()> {
        let formatter = *self.manager.formatter();
        for item in self.menu.items() {
            writeln!(self.out, "  {} - {}", item.name, formatter.format(item.price))?;
        }
        Ok(())
    }
}

/// What to print after a successful command.
enum Printed {
    Cart,
    State,
    Checkout(CheckoutSummary),
    Receipt(OrderReceipt),
    Nothing,
}
