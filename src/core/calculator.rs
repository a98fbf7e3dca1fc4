use crate::core::buffer::Buffer;
use crate::core::expression::Expression;
use crate::core::format::Formatter;
use crate::core::ConfigProvider;
use crate::domain::model::{Action, Digit, Evaluation, Glyphs, Input, Operator, Screen};
use crate::domain::ports::DisplaySink;

/// Shown on the expression line after a division by zero.
pub const FORBIDDEN: &str = "Forbidden";

/// Owns the buffer and expression and turns inputs into display updates.
///
/// Every call to [`Calculator::handle`] finishes mutating state and writing
/// the display before it returns.
pub struct Calculator<D: DisplaySink> {
    buffer: Buffer,
    expression: Expression,
    formatter: Formatter,
    glyphs: Glyphs,
    display: D,
    screen: Screen,
}

impl<D: DisplaySink> Calculator<D> {
    pub fn new(display: D, glyphs: Glyphs, formatter: Formatter) -> Self {
        let buffer = Buffer::new();
        let screen = Screen {
            buffer: buffer.get().to_string(),
            expression: String::new(),
        };
        Self {
            buffer,
            expression: Expression::default(),
            formatter,
            glyphs,
            display,
            screen,
        }
    }

    pub fn from_config<C: ConfigProvider>(display: D, config: &C) -> Self {
        Self::new(
            display,
            config.glyphs().clone(),
            Formatter::new(config.precision()),
        )
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Pushes the current buffer text and expression line to the display.
    pub fn refresh(&mut self) {
        let text = self.buffer.get().to_string();
        self.show_buffer_text(&text);
        self.sync_expression(false);
    }

    pub fn handle(&mut self, input: Input) {
        tracing::debug!("Handling input: {}", input);
        match input {
            Input::Digit(digit) => self.handle_digit(digit),
            Input::Operator(operator) => self.handle_operator(operator),
            Input::Action(action) => self.handle_action(action),
        }
    }

    fn handle_digit(&mut self, digit: Digit) {
        self.buffer.add_digit(digit);
        let text = self.buffer.get().to_string();
        self.show_buffer_text(&text);

        // A new second operand is starting; the old line goes, the state stays.
        if self.expression.is_complete() {
            self.show_expression_text("");
        }
    }

    fn handle_operator(&mut self, operator: Operator) {
        if self.expression.is_complete() {
            if !self.buffer.is_empty() {
                self.expression.first = Some(self.extract_operand());
            }
            self.expression.second = None;
        }

        if !self.buffer.is_empty() {
            let operand = self.extract_operand();
            if self.expression.first.is_none() {
                self.expression.first = Some(operand);
            } else {
                self.expression.second = Some(operand);
            }
        }

        if self.expression.is_complete() {
            match self.expression.calculate() {
                Evaluation::Invalid => {
                    self.forbid();
                    return;
                }
                Evaluation::Value(result) => {
                    tracing::debug!("Running total: {}", result);
                    self.expression.first = Some(result);
                    self.expression.second = None;
                    self.show_buffer_number(result);
                }
            }
        }

        self.expression.operator = Some(operator);
        self.sync_expression(false);
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Clear => {
                self.buffer.reset();
                self.expression.reset();
                let text = self.buffer.get().to_string();
                self.show_buffer_text(&text);
                self.sync_expression(false);
            }
            Action::RemoveCharacter => {
                self.buffer.remove_last_character();
                let text = self.buffer.get().to_string();
                self.show_buffer_text(&text);
            }
            Action::CalculatePercentage => self.calculate_percentage(),
            Action::Calculate => self.calculate(),
            Action::ChangeSign => {
                if self.buffer.is_empty() {
                    self.buffer.set(self.screen.buffer.clone());
                }
                self.buffer.change_sign();
                let text = self.buffer.get().to_string();
                self.show_buffer_text(&text);
            }
            Action::AddDecimalPoint => {
                self.buffer.add_decimal_point();
                let text = self.buffer.get().to_string();
                self.show_buffer_text(&text);
            }
        }
    }

    fn calculate_percentage(&mut self) {
        // Without an operator the typed entry is dropped and the total restarts at zero.
        if self.expression.operator.is_none() {
            self.buffer.make_empty();
            self.expression.first = Some(0.0);
            self.show_buffer_number(0.0);
            self.sync_expression(false);
            return;
        }

        let operand = self.current_operand();
        if self.expression.is_complete() {
            self.expression.first = operand;
        } else {
            self.expression.second = operand;
        }

        let percentage = self.expression.calculate_percentage();
        self.expression.second = Some(percentage);
        self.show_buffer_number(percentage);
        self.sync_expression(false);
    }

    fn calculate(&mut self) {
        let operand = self.current_operand();

        if self.expression.operator.is_none() {
            self.expression.first = operand;
            self.show_buffer_number(operand.unwrap_or(0.0));
            self.sync_expression(true);
            return;
        }

        if self.expression.is_complete() {
            self.expression.first = operand;
        } else {
            self.expression.second = operand;
        }
        self.sync_expression(false);

        match self.expression.calculate() {
            Evaluation::Invalid => self.forbid(),
            // Operator and second operand stay so a repeated `=` applies them again.
            Evaluation::Value(result) => {
                self.expression.first = Some(result);
                self.show_buffer_number(result);
            }
        }
    }

    /// Typed entry if there is one, otherwise the running total.
    fn current_operand(&mut self) -> Option<f64> {
        if self.buffer.is_empty() {
            self.expression.first
        } else {
            Some(self.extract_operand())
        }
    }

    fn extract_operand(&mut self) -> f64 {
        crate::core::buffer::parse_number(&self.buffer.extract())
    }

    fn forbid(&mut self) {
        tracing::warn!("Division by zero, resetting calculator");
        self.buffer.reset();
        self.expression.reset();
        let text = self.buffer.get().to_string();
        self.show_buffer_text(&text);
        self.show_expression_text(FORBIDDEN);
    }

    fn show_buffer_number(&mut self, value: f64) {
        let text = self.formatter.number(value);
        self.show_buffer_text(&text);
    }

    fn show_buffer_text(&mut self, text: &str) {
        self.screen.buffer = text.to_string();
        self.display.show_buffer(text);
    }

    fn show_expression_text(&mut self, text: &str) {
        self.screen.expression = text.to_string();
        self.display.show_expression(text);
    }

    fn sync_expression(&mut self, append_equals: bool) {
        let line = self
            .formatter
            .expression_line(&self.expression, &self.glyphs, append_equals);
        self.show_expression_text(&line);
    }
}
