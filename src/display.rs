//! Table rendering for members, books and checkouts

use std::io::{self, Write};

use crate::models::{Book, Checkout, Member};

/// Spaces between columns
const PADDING: usize = 2;

/// Column-aligned text table, flushed in one go once every row is known
#[derive(Debug, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn with_header(header: &[&str]) -> Self {
        let mut table = Self::default();
        table.push(header.iter().map(|h| h.to_string()).collect());
        table
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let widths: Vec<usize> = (0..columns)
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for row in &self.rows {
            let mut line = String::new();
            for (col, cell) in row.iter().enumerate() {
                if col + 1 == row.len() {
                    line.push_str(cell);
                } else {
                    let width = widths[col] + PADDING;
                    line.push_str(&format!("{:<width$}", cell, width = width));
                }
            }
            writeln!(out, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

pub fn write_members<'a, W, I>(out: &mut W, members: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Member>,
{
    let mut table = Table::with_header(&[
        "MemberID",
        "First Name",
        "Last Name",
        "Age",
        "Address",
        "No. Books Lent",
    ]);
    for member in members {
        table.push(vec![
            member.id.to_string(),
            member.first_name.clone(),
            member.last_name.clone(),
            member.age.to_string(),
            member.address.clone(),
            member.books_lent.len().to_string(),
        ]);
    }
    writeln!(out)?;
    table.write_to(out)
}

pub fn write_books<'a, W, I>(out: &mut W, books: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Book>,
{
    let mut table = Table::with_header(&[
        "BookID",
        "Book",
        "Author",
        "Publication Year",
        "Count",
        "Available",
    ]);
    for book in books {
        table.push(vec![
            book.id.to_string(),
            book.title.clone(),
            book.author.clone(),
            book.publication_year.to_string(),
            book.copies.to_string(),
            book.available.to_string(),
        ]);
    }
    writeln!(out)?;
    table.write_to(out)
}

pub fn write_checkouts<'a, W, I>(out: &mut W, checkouts: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Checkout>,
{
    let mut table = Table::with_header(&[
        "CheckOut ID",
        "Book ID",
        "Book Name",
        "Member ID",
        "Member Name",
        "CheckOut Time",
        "CheckIn Time",
    ]);
    for checkout in checkouts {
        table.push(vec![
            checkout.id.to_string(),
            checkout.book_id.to_string(),
            checkout.book_name.clone(),
            checkout.member_id.to_string(),
            checkout.member_name.clone(),
            checkout.check_out_time.to_string(),
            checkout
                .check_in_time
                .map(|d| d.to_string())
                .unwrap_or_default(),
        ]);
    }
    writeln!(out)?;
    table.write_to(out)
}
