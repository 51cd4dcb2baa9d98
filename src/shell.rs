//! Interactive menu over the circulation services

use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::{
    display,
    error::{AppError, AppResult},
    models::{BookId, CheckoutId, CreateCheckout, MemberId},
    services::Services,
};

const RULE: &str = "====================================================";

/// Whether the loop keeps going after an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu loop reading choices from `input` and rendering to `output`
#[derive(Debug)]
pub struct Shell<R, W> {
    services: Services,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(services: Services, input: R, output: W) -> Self {
        Self {
            services,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends. Only I/O failures end the loop
    /// with an error; every other error is reported and the menu shown again.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            self.write_menu()?;
            let Some(choice) = self.prompt("Enter Your Choice: ")? else {
                break;
            };
            writeln!(self.output, "\n{}", RULE)?;

            match self.dispatch(choice.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(AppError::Io(e)) => return Err(AppError::Io(e)),
                Err(e) => {
                    tracing::debug!("Menu option failed: {:?}", e);
                    writeln!(self.output, "Error [{}]: {}", e.code() as u32, e)?;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn into_parts(self) -> (Services, W) {
        (self.services, self.output)
    }

    fn write_menu(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n{}", RULE)?;
        writeln!(self.output, "\t\t\tMenu")?;
        writeln!(self.output, "{}", RULE)?;
        for line in [
            "1. Add Member",
            "2. Add Book",
            "3. Check Out A Book",
            "4. Return A Book",
            "5. View Members",
            "6. View Books",
            "7. View Check Out Transactions History",
            "8. View Books Currently in Check Out",
            "9. Exit",
            "10. Check Records Consistency",
        ] {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output, "{}", RULE)?;
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> AppResult<Flow> {
        match choice {
            "" | "0" => Ok(Flow::Continue),
            "1" => self.add_member(),
            "2" => self.add_book(),
            "3" => self.check_out(),
            "4" => self.check_in(),
            "5" => {
                let members = self.services.members().list_members();
                display::write_members(&mut self.output, &members)?;
                Ok(Flow::Continue)
            }
            "6" => {
                let books = self.services.catalog().list_books();
                display::write_books(&mut self.output, &books)?;
                Ok(Flow::Continue)
            }
            "7" => {
                writeln!(self.output, "\nCheckout Transactions Table: ")?;
                let history = self.services.loans().list_history();
                display::write_checkouts(&mut self.output, &history)?;
                Ok(Flow::Continue)
            }
            "8" => {
                writeln!(self.output, "\nCurrent Checkout View Table: ")?;
                let open = self.services.loans().list_open();
                display::write_checkouts(&mut self.output, &open)?;
                Ok(Flow::Continue)
            }
            "9" => Ok(Flow::Exit),
            "10" => {
                let violations = self.services.repository().check_consistency();
                if violations.is_empty() {
                    writeln!(self.output, "All records consistent.")?;
                } else {
                    for violation in violations {
                        writeln!(self.output, "{}", violation)?;
                    }
                }
                Ok(Flow::Continue)
            }
            _ => {
                writeln!(self.output, "\nWrong Choice!!!")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_member(&mut self) -> AppResult<Flow> {
        writeln!(self.output, "Enter Member's Details Below: ")?;
        let Some(attributes) = self.prompt_attributes(&[
            ("firstName", "First Name: "),
            ("lastName", "Second Name: "),
            ("age", "Age: "),
            ("address", "Address: "),
        ])?
        else {
            return Ok(Flow::Exit);
        };

        let member = self
            .services
            .members()
            .register_member_from_attributes(&attributes)?;
        display::write_members(&mut self.output, [&member])?;
        Ok(Flow::Continue)
    }

    fn add_book(&mut self) -> AppResult<Flow> {
        writeln!(self.output, "Enter Book's Details Below: ")?;
        let Some(attributes) = self.prompt_attributes(&[
            ("bookName", "Book Name: "),
            ("author", "Author: "),
            ("publicationYear", "Publication Year: "),
        ])?
        else {
            return Ok(Flow::Exit);
        };

        let book = self
            .services
            .catalog()
            .register_book_from_attributes(&attributes)?;
        display::write_books(&mut self.output, [&book])?;
        Ok(Flow::Continue)
    }

    fn check_out(&mut self) -> AppResult<Flow> {
        let Some(book_id) = self.prompt_id("Book ID: ", "book id")? else {
            return Ok(Flow::Exit);
        };
        let Some(member_id) = self.prompt_id("Member ID: ", "member id")? else {
            return Ok(Flow::Exit);
        };

        let mut request = CreateCheckout::new(BookId(book_id), MemberId(member_id));
        if self.services.config().allow_transfer {
            let Some(answer) = self.prompt("Transfer if already lent (y/N): ")? else {
                return Ok(Flow::Exit);
            };
            if answer.trim().eq_ignore_ascii_case("y") {
                request = request.forced();
            }
        }

        let checkout = self.services.loans().check_out(request)?;
        display::write_checkouts(&mut self.output, [&checkout])?;
        Ok(Flow::Continue)
    }

    fn check_in(&mut self) -> AppResult<Flow> {
        let Some(checkout_id) = self.prompt_id("CheckOut ID: ", "checkout id")? else {
            return Ok(Flow::Exit);
        };

        let checkout = self.services.loans().check_in(CheckoutId(checkout_id))?;
        display::write_checkouts(&mut self.output, [&checkout])?;
        Ok(Flow::Continue)
    }

    /// Ask for each field in turn; `None` when input ends part way
    fn prompt_attributes(
        &mut self,
        fields: &[(&str, &str)],
    ) -> AppResult<Option<HashMap<String, String>>> {
        let mut attributes = HashMap::new();
        for (key, label) in fields {
            let Some(value) = self.prompt(label)? else {
                return Ok(None);
            };
            attributes.insert(key.to_string(), value);
        }
        Ok(Some(attributes))
    }

    fn prompt_id(&mut self, label: &str, field: &'static str) -> AppResult<Option<u32>> {
        let Some(value) = self.prompt(label)? else {
            return Ok(None);
        };
        let id = value
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::Parse { field, value })?;
        Ok(Some(id))
    }

    /// Print a label and read one line without its line ending; `None` at end of input
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
