//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Nothing is retained across sections beyond what is read back from the
//! store; switching into a section recomputes its data.

use rand::Rng;

use crate::config::Settings;
use crate::models::{Category, ExpenseRecord, Money, RiskTier};
use crate::services::investment::{MAX_HORIZON_YEARS, MIN_HORIZON_YEARS};
use crate::services::{predict_savings, simulate_growth, GrowthCurve, SavingsPrediction, SpendingAnalysis};
use crate::storage::BudgetStore;

use super::widgets::AmountInput;

/// Which dashboard section is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    IncomeInput,
    ExpenseInput,
    SpendingAnalysis,
    SavingsPrediction,
    InvestmentPlanning,
}

impl Section {
    /// All sections in sidebar order
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::IncomeInput,
        Section::ExpenseInput,
        Section::SpendingAnalysis,
        Section::SavingsPrediction,
        Section::InvestmentPlanning,
    ];

    /// Section title as shown in the sidebar and main panel header
    pub const fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::IncomeInput => "Income Input",
            Section::ExpenseInput => "Expense Input",
            Section::SpendingAnalysis => "Spending Analysis",
            Section::SavingsPrediction => "Savings Prediction",
            Section::InvestmentPlanning => "Investment Planning",
        }
    }

    /// Whether this section contains editable input fields
    pub const fn has_inputs(&self) -> bool {
        matches!(self, Section::IncomeInput | Section::ExpenseInput)
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub store: &'a dyn BudgetStore,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active section
    pub active_section: Section,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Selected section index in the sidebar
    pub sidebar_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Income entry field
    pub income_input: AmountInput,

    /// One entry field per expense category, in display order
    pub expense_inputs: Vec<AmountInput>,

    /// Which expense field is focused
    pub expense_focus: usize,

    /// Spending analysis computed on section entry; `None` when no expense
    /// record exists (the view shows the warning)
    pub analysis: Option<SpendingAnalysis>,

    /// Savings prediction computed on section entry; `None` when no expense
    /// record exists
    pub prediction: Option<SavingsPrediction>,

    /// Selected risk tier for the investment planner
    pub risk_tier: RiskTier,

    /// Selected horizon in years (1-30 slider)
    pub horizon_years: u32,

    /// Last simulated growth curve, if any
    pub growth_curve: Option<GrowthCurve>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(store: &'a dyn BudgetStore, settings: &'a Settings) -> Self {
        let expense_inputs = Category::ALL
            .iter()
            .map(|c| AmountInput::new(c.name(), settings.expense_step_cents))
            .collect();

        Self {
            store,
            settings,
            should_quit: false,
            active_section: Section::default(),
            focused_panel: FocusedPanel::default(),
            sidebar_index: 0,
            status_message: None,
            income_input: AmountInput::new("Monthly income", settings.income_step_cents),
            expense_inputs,
            expense_focus: 0,
            analysis: None,
            prediction: None,
            risk_tier: settings.default_risk_tier,
            horizon_years: settings.default_horizon_years.clamp(MIN_HORIZON_YEARS, MAX_HORIZON_YEARS),
            growth_curve: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different section, recomputing its data
    pub fn switch_section(&mut self, section: Section) {
        self.active_section = section;
        self.clear_status();

        match section {
            Section::Home => {}
            Section::IncomeInput => self.load_income_input(),
            Section::ExpenseInput => self.load_expense_inputs(),
            Section::SpendingAnalysis => self.refresh_analysis(),
            Section::SavingsPrediction => self.run_prediction(&mut rand::thread_rng()),
            Section::InvestmentPlanning => {
                // Suggestions are static; the curve only appears on trigger
                self.growth_curve = None;
            }
        }
    }

    /// Move sidebar selection up
    pub fn sidebar_up(&mut self) {
        if self.sidebar_index > 0 {
            self.sidebar_index -= 1;
        }
    }

    /// Move sidebar selection down
    pub fn sidebar_down(&mut self) {
        if self.sidebar_index < Section::ALL.len() - 1 {
            self.sidebar_index += 1;
        }
    }

    /// Activate the section currently selected in the sidebar
    pub fn activate_selected_section(&mut self) {
        let section = Section::ALL[self.sidebar_index];
        self.switch_section(section);
        self.focused_panel = FocusedPanel::Main;
        for (i, input) in self.expense_inputs.iter_mut().enumerate() {
            input.set_focused(section == Section::ExpenseInput && i == 0);
        }
        self.expense_focus = 0;
        self.income_input
            .set_focused(section == Section::IncomeInput);
    }

    /// Return focus to the sidebar
    pub fn focus_sidebar(&mut self) {
        self.focused_panel = FocusedPanel::Sidebar;
        self.income_input.set_focused(false);
        for input in &mut self.expense_inputs {
            input.set_focused(false);
        }
    }

    /// Pre-fill the income field from the store
    fn load_income_input(&mut self) {
        match self.store.load_income() {
            Ok(Some(income)) => self.income_input.set_amount(income),
            Ok(None) => self.income_input.clear(),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Pre-fill the expense fields from the store
    fn load_expense_inputs(&mut self) {
        match self.store.load_expenses() {
            Ok(Some(record)) => {
                for (input, category) in self.expense_inputs.iter_mut().zip(Category::ALL) {
                    input.set_amount(record.get(category));
                }
            }
            Ok(None) => {
                for input in &mut self.expense_inputs {
                    input.clear();
                }
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Save the income field to the store
    pub fn save_income(&mut self) {
        let Some(amount) = self.income_input.amount() else {
            self.set_status("Invalid income amount");
            return;
        };

        match self.store.save_income(amount) {
            Ok(()) => self.set_status("Monthly income saved successfully!"),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Save all six expense fields to the store as one record
    pub fn save_expenses(&mut self) {
        let mut record = ExpenseRecord::new();
        for (input, category) in self.expense_inputs.iter().zip(Category::ALL) {
            let Some(amount) = input.amount() else {
                self.set_status(format!("Invalid amount for {}", category));
                return;
            };
            record.set(category, amount);
        }

        match self.store.save_expenses(&record) {
            Ok(()) => self.set_status("Expenses saved!"),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Move expense field focus up
    pub fn expense_focus_up(&mut self) {
        if self.expense_focus > 0 {
            self.set_expense_focus(self.expense_focus - 1);
        }
    }

    /// Move expense field focus down
    pub fn expense_focus_down(&mut self) {
        if self.expense_focus < self.expense_inputs.len() - 1 {
            self.set_expense_focus(self.expense_focus + 1);
        }
    }

    fn set_expense_focus(&mut self, index: usize) {
        self.expense_focus = index;
        for (i, input) in self.expense_inputs.iter_mut().enumerate() {
            input.set_focused(i == index);
        }
    }

    /// The currently focused expense field
    pub fn focused_expense_input(&mut self) -> &mut AmountInput {
        &mut self.expense_inputs[self.expense_focus]
    }

    /// Recompute the spending analysis from the store
    pub fn refresh_analysis(&mut self) {
        match SpendingAnalysis::generate(self.store) {
            Ok(analysis) => self.analysis = analysis,
            Err(e) => {
                self.analysis = None;
                self.set_status(e.to_string());
            }
        }
    }

    /// Re-run the savings prediction with fresh random training data
    pub fn run_prediction<R: Rng>(&mut self, rng: &mut R) {
        match predict_savings(self.store, rng) {
            Ok(prediction) => self.prediction = prediction,
            Err(e) => {
                self.prediction = None;
                self.set_status(e.to_string());
            }
        }
    }

    /// Cycle the risk tier forward
    pub fn next_risk_tier(&mut self) {
        self.risk_tier = self.risk_tier.next();
    }

    /// Cycle the risk tier backward
    pub fn prev_risk_tier(&mut self) {
        self.risk_tier = self.risk_tier.prev();
    }

    /// Increase the horizon slider
    pub fn horizon_up(&mut self) {
        if self.horizon_years < MAX_HORIZON_YEARS {
            self.horizon_years += 1;
        }
    }

    /// Decrease the horizon slider
    pub fn horizon_down(&mut self) {
        if self.horizon_years > MIN_HORIZON_YEARS {
            self.horizon_years -= 1;
        }
    }

    /// Run the investment growth simulation for the selected horizon
    pub fn run_simulation<R: Rng>(&mut self, rng: &mut R) {
        match simulate_growth(rng, self.horizon_years) {
            Ok(curve) => self.growth_curve = Some(curve),
            Err(e) => {
                self.growth_curve = None;
                self.set_status(e.to_string());
            }
        }
    }
}
