use crate::ledger::Ledger;
use crate::ui::util::{format_amount, parse_amount};

/// Categories offered to the user at startup. Purely a front-end default:
/// the ledger accepts any category string it is handed.
pub(crate) const DEFAULT_CATEGORIES: &[&str] = &[
    "Entertainment",
    "Food",
    "Transport",
    "Clothing",
    "Housing",
    "Health",
    "Education",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Entry,
    Summary,
    Table,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Entry, Self::Summary, Self::Table]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entry => write!(f, "Entry"),
            Self::Summary => write!(f, "Summary"),
            Self::Table => write!(f, "Table"),
        }
    }
}

/// Which text field is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Income,
    Amount,
    NewCategory,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Amount => write!(f, "Amount"),
            Self::NewCategory => write!(f, "New category"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Editing(Field),
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Editing(_) => write!(f, "EDIT"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) ledger: Ledger,

    // Entry screen
    pub(crate) category_index: usize,

    // Table screen
    pub(crate) txn_index: usize,
    pub(crate) txn_scroll: usize,
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        let mut ledger = Ledger::new();
        for cat in DEFAULT_CATEGORIES {
            ledger.add_category(cat);
        }
        Self {
            running: true,
            screen: Screen::Entry,
            input_mode: InputMode::Normal,
            input: String::new(),
            status_message: String::new(),
            show_help: false,
            ledger,
            category_index: 0,
            txn_index: 0,
            txn_scroll: 0,
            visible_rows: 10,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn selected_category(&self) -> Option<&str> {
        self.ledger
            .categories()
            .get(self.category_index)
            .map(String::as_str)
    }

    pub(crate) fn next_category(&mut self) {
        let len = self.ledger.categories().len();
        if len > 0 {
            self.category_index = (self.category_index + 1) % len;
        }
    }

    pub(crate) fn prev_category(&mut self) {
        let len = self.ledger.categories().len();
        if len > 0 {
            self.category_index = if self.category_index == 0 {
                len - 1
            } else {
                self.category_index - 1
            };
        }
    }

    pub(crate) fn start_editing(&mut self, field: Field) {
        self.input_mode = InputMode::Editing(field);
        self.input.clear();
        self.status_message.clear();
    }

    pub(crate) fn cancel_editing(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input.clear();
    }

    /// Commit the edit buffer to the ledger. Parse failures and ledger
    /// rejections land in the status bar and leave the edit open so the
    /// user can fix the field; the ledger itself never sees malformed
    /// numeric input.
    pub(crate) fn commit_input(&mut self) {
        let InputMode::Editing(field) = self.input_mode else {
            return;
        };
        match field {
            Field::Income => {
                let Some(income) = parse_amount(&self.input) else {
                    self.set_status("Please enter a valid income amount");
                    return;
                };
                self.ledger.set_income(income);
                self.set_status(format!("Income set to {}", format_amount(income)));
            }
            Field::Amount => {
                let Some(amount) = parse_amount(&self.input) else {
                    self.set_status("Please enter a valid transaction amount");
                    return;
                };
                let Some(category) = self.selected_category().map(str::to_string) else {
                    self.set_status("Please select a category first");
                    return;
                };
                match self.ledger.add_transaction(&category, amount) {
                    Ok(()) => {
                        self.set_status(format!(
                            "Added {category}: {}",
                            format_amount(amount)
                        ));
                    }
                    Err(e) => {
                        self.set_status(e.to_string());
                        return;
                    }
                }
            }
            Field::NewCategory => {
                let name = self.input.trim().to_string();
                if name.is_empty() {
                    self.set_status("Category name cannot be empty");
                    return;
                }
                let before = self.ledger.categories().len();
                self.ledger.add_category(&name);
                if self.ledger.categories().len() > before {
                    self.set_status(format!("Added category '{name}'"));
                } else {
                    self.set_status(format!("Category '{name}' already exists"));
                }
            }
        }
        self.input_mode = InputMode::Normal;
        self.input.clear();
    }
}
