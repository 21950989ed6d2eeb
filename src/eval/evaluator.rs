//! Two-pass expression evaluation
//!
//! Reduces a token stream to a single value: one left-to-right pass folding
//! `*` and `/`, then one left-to-right pass folding `+` and `-`. Operators of
//! equal precedence are never reordered, which matters for `-` and `/`.

use super::tokenizer::TokenStream;

impl TokenStream {
    /// Evaluate the expression
    ///
    /// Infallible: the tokenizer already guarantees the operand/operator
    /// shape, and division by zero is allowed to produce an infinite or NaN
    /// value (rejected later by the equation tolerance check).
    ///
    /// The multiplicative pass writes into fresh sequences instead of
    /// removing elements mid-scan: each `*`/`/` folds its right operand into
    /// the last reduced operand, while `+`/`-` carry both through untouched.
    ///
    /// # Examples
    /// ```
    /// use numble::eval::tokenize;
    ///
    /// let value = tokenize("2*3+4").unwrap().evaluate();
    /// assert!((value - 10.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        let operands = self.operands();
        let operators = self.operators();

        // Multiplicative pass
        let mut reduced: Vec<f64> = Vec::with_capacity(operands.len());
        let mut additive: Vec<super::Operator> = Vec::with_capacity(operators.len());
        reduced.push(operands[0]);

        for (op, &rhs) in operators.iter().zip(&operands[1..]) {
            if op.is_multiplicative() {
                let lhs = reduced
                    .last_mut()
                    .expect("reduced sequence is seeded with the first operand");
                *lhs = op.apply(*lhs, rhs);
            } else {
                additive.push(*op);
                reduced.push(rhs);
            }
        }

        // Additive pass
        let mut total = reduced[0];
        for (op, &rhs) in additive.iter().zip(&reduced[1..]) {
            total = op.apply(total, rhs);
        }

        total
    }
}

#[cfg(test)]
mod tests {
    use crate::eval::tokenize;

    fn eval(expr: &str) -> f64 {
        tokenize(expr).unwrap().evaluate()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn evaluate_single_operand() {
        assert_close(eval("7"), 7.0);
        assert_close(eval("-7"), -7.0);
    }

    #[test]
    fn evaluate_addition_and_subtraction() {
        assert_close(eval("3+2"), 5.0);
        assert_close(eval("10-4"), 6.0);
        assert_close(eval("1+2+3+4"), 10.0);
    }

    #[test]
    fn evaluate_multiplication_before_addition() {
        assert_close(eval("2*3+4"), 10.0);
        assert_close(eval("4+2*3"), 10.0);
        assert_close(eval("2+3*4-5"), 9.0);
    }

    #[test]
    fn evaluate_division_before_subtraction() {
        assert_close(eval("10-6/2"), 7.0);
        assert_close(eval("8/4+1"), 3.0);
    }

    #[test]
    fn evaluate_subtraction_is_left_to_right() {
        // (10-2)-3, never 10-(2-3)
        assert_close(eval("10-2-3"), 5.0);
    }

    #[test]
    fn evaluate_division_is_left_to_right() {
        // (8/2)/2, never 8/(2/2)
        assert_close(eval("8/2/2"), 2.0);
    }

    #[test]
    fn evaluate_division_is_not_commutative() {
        assert_close(eval("1/4"), 0.25);
        assert_close(eval("4/1"), 4.0);
    }

    #[test]
    fn evaluate_chained_multiplicative_run() {
        assert_close(eval("2*3*4/6"), 4.0);
        assert_close(eval("1+2*3*4-5"), 20.0);
    }

    #[test]
    fn evaluate_negative_operands() {
        assert_close(eval("-3+5"), 2.0);
        assert_close(eval("5--3"), 8.0);
        assert_close(eval("2*-3"), -6.0);
    }

    #[test]
    fn evaluate_decimals() {
        assert_close(eval("1.5+2.5"), 4.0);
        assert_close(eval("0.1*10"), 1.0);
    }

    #[test]
    fn evaluate_division_by_zero_flows_through() {
        // Deliberately unguarded: IEEE semantics carry to the caller
        assert!(eval("5/0").is_infinite());
        assert!(eval("-5/0").is_infinite());
        assert!(eval("0/0").is_nan());
    }

    #[test]
    fn evaluate_multiplicative_after_division_by_zero() {
        // The run keeps folding left to right through the infinity
        assert!(eval("5/0*2").is_infinite());
        assert!(eval("5/0+1").is_infinite());
    }
}
