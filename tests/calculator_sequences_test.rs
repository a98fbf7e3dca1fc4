use small_calc::core::format::Formatter;
use small_calc::core::{Glyphs, Input, Operator};
use small_calc::{Calculator, RecordingDisplay, Session, Settings};

fn session() -> Session<RecordingDisplay> {
    Session::from_config(RecordingDisplay::new(), &Settings::default()).unwrap()
}

fn screen_after(script: &str) -> (String, String) {
    let mut session = session();
    session.run_script(script);
    let screen = session.calculator().screen();
    (screen.buffer.clone(), screen.expression.clone())
}

#[test]
fn test_addition_then_equals() {
    let (buffer, expression) = screen_after("5+3=");
    assert_eq!(buffer, "8");
    assert_eq!(expression, "5 + 3 =");
}

#[test]
fn test_division_by_zero_resets_and_next_digit_starts_fresh() {
    let mut session = session();
    session.run_script("7/0+");
    assert_eq!(session.calculator().screen().buffer, "0");
    assert_eq!(session.calculator().screen().expression, "Forbidden");
    assert_eq!(session.calculator().expression().operator, None);
    assert_eq!(session.calculator().expression().first, None);

    session.run_script("2");
    assert_eq!(session.calculator().screen().buffer, "2");
    assert_eq!(session.calculator().buffer().get(), "2");
}

#[test]
fn test_division_by_zero_on_equals() {
    for dividend in ["1", "7", "0", "12.5"] {
        let (buffer, expression) = screen_after(&format!("{}/0=", dividend));
        assert_eq!(buffer, "0", "dividend {}", dividend);
        assert_eq!(expression, "Forbidden", "dividend {}", dividend);
    }
}

#[test]
fn test_clear_from_any_state() {
    for script in ["", "12", "5+", "5+3=", "7/0=", "9%", "1.5s"] {
        let (buffer, expression) = screen_after(&format!("{}c", script));
        assert_eq!(buffer, "0", "after {:?}", script);
        // Blank segments keep their separating spaces.
        assert_eq!(expression, "   ", "after {:?}", script);
        assert!(expression.trim().is_empty());
    }
}

#[test]
fn test_chained_operators_keep_running_total() {
    let mut session = session();
    session.run_script("2+3*");
    assert_eq!(session.calculator().screen().buffer, "5");
    assert_eq!(session.calculator().screen().expression, "5 ×  ");

    session.run_script("4=");
    assert_eq!(session.calculator().screen().buffer, "20");
    assert_eq!(session.calculator().screen().expression, "5 × 4 =");
}

#[test]
fn test_repeated_equals_reapplies_last_step() {
    let mut session = session();
    session.run_script("5+3==");
    assert_eq!(session.calculator().screen().buffer, "11");
    assert_eq!(session.calculator().screen().expression, "8 + 3 =");

    session.run_script("=");
    assert_eq!(session.calculator().screen().buffer, "14");
}

#[test]
fn test_equals_keeps_operator_but_operator_clears_second_operand() {
    let mut session = session();
    session.run_script("5+3=");
    let expression = *session.calculator().expression();
    assert_eq!(expression.first, Some(8.0));
    assert_eq!(expression.second, Some(3.0));
    assert_eq!(expression.operator, Some(Operator::Addition));

    session.run_script("-");
    let expression = *session.calculator().expression();
    assert_eq!(expression.first, Some(8.0));
    assert_eq!(expression.second, None);
    assert_eq!(expression.operator, Some(Operator::Subtraction));
}

#[test]
fn test_operator_after_result_with_fresh_entry_promotes_entry() {
    let mut session = session();
    session.run_script("5+3=9*");
    let expression = *session.calculator().expression();
    assert_eq!(expression.first, Some(9.0));
    assert_eq!(expression.second, None);
    assert_eq!(expression.operator, Some(Operator::Multiplication));
    assert_eq!(session.calculator().screen().expression, "9 ×  ");
}

#[test]
fn test_equals_without_operator_forces_equals_sign() {
    let (buffer, expression) = screen_after("12=");
    assert_eq!(buffer, "12");
    assert_eq!(expression, "12   =");
}

#[test]
fn test_percentage_is_product_based() {
    let mut session = session();
    session.run_script("200+50%");
    assert_eq!(session.calculator().expression().second, Some(100.0));
    assert_eq!(session.calculator().screen().buffer, "100");
    assert_eq!(session.calculator().screen().expression, "200 + 100 =");

    session.run_script("=");
    assert_eq!(session.calculator().screen().buffer, "300");
}

#[test]
fn test_percentage_without_operator_discards_entry() {
    let mut session = session();
    session.run_script("42%");
    assert_eq!(session.calculator().screen().buffer, "0");
    assert_eq!(session.calculator().screen().expression, "0   ");
    assert_eq!(session.calculator().expression().first, Some(0.0));
    assert!(session.calculator().buffer().is_empty());
}

#[test]
fn test_percentage_with_empty_buffer_uses_first_operand() {
    let mut session = session();
    session.run_script("50+%");
    assert_eq!(session.calculator().expression().second, Some(25.0));
    assert_eq!(session.calculator().screen().buffer, "25");
}

#[test]
fn test_results_rounded_to_three_places() {
    let (buffer, expression) = screen_after("1/3=");
    assert_eq!(buffer, "0.333");
    assert_eq!(expression, "1 ÷ 3 =");

    let (buffer, _) = screen_after("0.1+0.2=");
    assert_eq!(buffer, "0.3");
}

#[test]
fn test_results_round_the_stored_double() {
    for (script, shown) in [
        ("1.0005=", "1"),
        ("1.0045=", "1.004"),
        ("1.2345=", "1.234"),
        ("0.0625=", "0.063"),
    ] {
        let (buffer, _) = screen_after(script);
        assert_eq!(buffer, shown, "after {:?}", script);
    }

    let (_, expression) = screen_after("1.0005+1=");
    assert_eq!(expression, "1 + 1 =");
}

#[test]
fn test_zero_operand_still_gets_equals_sign() {
    let (buffer, expression) = screen_after("0+3=");
    assert_eq!(buffer, "3");
    assert_eq!(expression, "0 + 3 =");
}

#[test]
fn test_huge_results_use_exponent_form() {
    let (buffer, expression) = screen_after("99999999999*99999999999=");
    assert_eq!(buffer, "9.9999999998e+21");
    assert_eq!(expression, "99999999999 × 99999999999 =");
}

#[test]
fn test_buffer_text_is_shown_verbatim() {
    let (buffer, _) = screen_after("1.50");
    assert_eq!(buffer, "1.50");
    let (buffer, _) = screen_after("..7");
    assert_eq!(buffer, "0.7");
}

#[test]
fn test_backspace_until_empty_lands_on_default() {
    let mut session = session();
    session.run_script("123.4");
    for _ in 0..8 {
        session.run_script("{Backspace}");
        assert!(!session.calculator().screen().buffer.is_empty());
    }
    assert_eq!(session.calculator().screen().buffer, "0");
}

#[test]
fn test_change_sign_sequences() {
    let (buffer, _) = screen_after("12s");
    assert_eq!(buffer, "-12");

    let (buffer, _) = screen_after("s");
    assert_eq!(buffer, "0");

    // The result on screen becomes the entry being negated.
    let mut session = session();
    session.run_script("5+3=s+");
    assert_eq!(session.calculator().expression().first, Some(-8.0));
    assert_eq!(session.calculator().screen().expression, "-8 +  ");
}

#[test]
fn test_change_sign_after_operator_negates_shown_value() {
    let mut session = session();
    session.run_script("9+s");
    assert_eq!(session.calculator().screen().buffer, "-9");
    session.run_script("=");
    assert_eq!(session.calculator().screen().buffer, "0");
    assert_eq!(session.calculator().screen().expression, "9 + -9 =");
}

#[test]
fn test_digit_after_result_blanks_expression_line() {
    let (buffer, expression) = screen_after("5+3=4");
    assert_eq!(buffer, "4");
    assert_eq!(expression, "");
}

#[test]
fn test_calculator_accepts_inputs_directly() {
    let mut calc = Calculator::new(RecordingDisplay::new(), Glyphs::default(), Formatter::new(2));
    for name in ["2", "division", "3", "calculate"] {
        calc.handle(name.parse::<Input>().unwrap());
    }
    assert_eq!(calc.screen().buffer, "0.67");
    assert_eq!(calc.display().last_buffer(), Some("0.67"));
}
