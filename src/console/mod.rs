//! # Console
//!
//! The interactive text menu. It parses numbers from the input, calls into the
//! [`RetailSystem`], and renders results and errors as plain text.
//!
//! ```text
//! 1. List Products
//! 2. Place Order
//! 3. View Inventory
//! 4. Update Product Price
//! 5. Update Inventory
//! 6. Generate Sales Report
//! 7. Exit
//! ```
//!
//! End of input is treated like choosing `7`.

use crate::lifecycle::RetailSystem;
use crate::model::ProductId;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::str::FromStr;
use tracing::debug;

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListProducts,
    PlaceOrder,
    ViewInventory,
    UpdatePrice,
    UpdateInventory,
    SalesReport,
    Exit,
}

impl MenuChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::ListProducts),
            2 => Some(Self::PlaceOrder),
            3 => Some(Self::ViewInventory),
            4 => Some(Self::UpdatePrice),
            5 => Some(Self::UpdateInventory),
            6 => Some(Self::SalesReport),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the menu loop until the user exits or the input ends.
    pub fn run(&mut self, system: &mut RetailSystem) -> io::Result<()> {
        loop {
            self.display_menu()?;
            let Some(number) = self.read_number::<i64>()? else {
                writeln!(self.output, "Exiting...")?;
                break;
            };
            debug!(number, "Menu choice");

            match MenuChoice::from_number(number) {
                Some(choice) => {
                    if self.handle(choice, system)?.is_break() {
                        writeln!(self.output, "Exiting...")?;
                        break;
                    }
                }
                None => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
        self.output.flush()
    }

    fn handle(
        &mut self,
        choice: MenuChoice,
        system: &mut RetailSystem,
    ) -> io::Result<ControlFlow<()>> {
        match choice {
            MenuChoice::ListProducts => self.list_products(system).map(ControlFlow::Continue),
            MenuChoice::PlaceOrder => self.place_order(system),
            MenuChoice::ViewInventory => self.view_inventory(system).map(ControlFlow::Continue),
            MenuChoice::UpdatePrice => self.update_price(system),
            MenuChoice::UpdateInventory => self.update_inventory(system),
            MenuChoice::SalesReport => self.sales_report(system).map(ControlFlow::Continue),
            MenuChoice::Exit => Ok(ControlFlow::Break(())),
        }
    }

    fn display_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "1. List Products")?;
        writeln!(self.output, "2. Place Order")?;
        writeln!(self.output, "3. View Inventory")?;
        writeln!(self.output, "4. Update Product Price")?;
        writeln!(self.output, "5. Update Inventory")?;
        writeln!(self.output, "6. Generate Sales Report")?;
        writeln!(self.output, "7. Exit")?;
        self.prompt("Enter choice: ")
    }

    fn list_products(&mut self, system: &RetailSystem) -> io::Result<()> {
        writeln!(self.output, "Product Catalog:")?;
        for product in system.catalog().list() {
            writeln!(self.output, "{product}")?;
        }
        Ok(())
    }

    fn place_order(&mut self, system: &mut RetailSystem) -> io::Result<ControlFlow<()>> {
        let Some(product_id) = self.ask_product_id()? else {
            return Ok(ControlFlow::Break(()));
        };
        self.prompt("Enter quantity: ")?;
        let Some(quantity) = self.read_number::<u32>()? else {
            return Ok(ControlFlow::Break(()));
        };

        match system.ordering().place_order(product_id, quantity) {
            Ok(order) => writeln!(
                self.output,
                "Order placed successfully. Order details: {order}"
            )?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn view_inventory(&mut self, system: &RetailSystem) -> io::Result<()> {
        writeln!(self.output, "Current Inventory:")?;
        for (product_id, quantity) in system.inventory().all_entries() {
            writeln!(self.output, "Product ID: {product_id}, Quantity: {quantity}")?;
        }
        Ok(())
    }

    fn update_price(&mut self, system: &mut RetailSystem) -> io::Result<ControlFlow<()>> {
        let Some(product_id) = self.ask_product_id()? else {
            return Ok(ControlFlow::Break(()));
        };
        self.prompt("Enter new price: ")?;
        let Some(price) = self.read_number::<Decimal>()? else {
            return Ok(ControlFlow::Break(()));
        };

        match system.catalog_mut().update_price(product_id, price) {
            Ok(true) => writeln!(self.output, "Product price updated successfully.")?,
            Ok(false) => writeln!(self.output, "Product not found; nothing updated.")?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn update_inventory(&mut self, system: &mut RetailSystem) -> io::Result<ControlFlow<()>> {
        let Some(product_id) = self.ask_product_id()? else {
            return Ok(ControlFlow::Break(()));
        };
        self.prompt("Enter new quantity: ")?;
        let Some(quantity) = self.read_number::<i64>()? else {
            return Ok(ControlFlow::Break(()));
        };

        // The ledger accepts any value; negative stock is refused here.
        if quantity < 0 {
            writeln!(
                self.output,
                "Invalid argument: quantity must not be negative, got {quantity}"
            )?;
        } else {
            system.inventory_mut().set(product_id, quantity);
            writeln!(self.output, "Inventory updated successfully.")?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn sales_report(&mut self, system: &RetailSystem) -> io::Result<()> {
        writeln!(self.output, "Sales Report:")?;
        let report = match system.reporter().summarize() {
            Ok(report) => report,
            Err(e) => return writeln!(self.output, "{e}"),
        };
        for (product_id, summary) in report {
            writeln!(
                self.output,
                "Product ID: {product_id}, Total Sales: ${:.2}, Quantity Sold: {}",
                summary.total_sales, summary.quantity_sold
            )?;
        }
        Ok(())
    }

    fn ask_product_id(&mut self) -> io::Result<Option<ProductId>> {
        self.prompt("Enter product ID: ")?;
        Ok(self.read_number::<u32>()?.map(ProductId))
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Reads lines until one parses as `T`. Returns `None` at end of input.
    fn read_number<T: FromStr>(&mut self) -> io::Result<Option<T>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Invalid input. Please enter a number.")?,
            }
        }
    }
}
