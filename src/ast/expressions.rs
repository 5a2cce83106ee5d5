use std::fmt::Display;

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
}

/// Infix operators, all left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
        }
    }
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// Expression tree. Every node owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn number(value: i64) -> Self {
        Expr::Number(value)
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Prints the tree as a fully parenthesized prefix form, e.g. `(+ 1 (* 2 3))`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        enum Piece<'a> {
            Expr(&'a Expr),
            Text(&'static str),
        }

        // Explicit stack so long operator chains don't exhaust the native one
        let mut pieces = vec![Piece::Expr(self)];

        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Expr(Expr::Number(value)) => write!(f, "{}", value)?,
                Piece::Expr(Expr::Unary { op, operand }) => {
                    write!(f, "({} ", op.symbol())?;
                    pieces.push(Piece::Text(")"));
                    pieces.push(Piece::Expr(operand));
                }
                Piece::Expr(Expr::Binary { op, left, right }) => {
                    write!(f, "({} ", op.symbol())?;
                    pieces.push(Piece::Text(")"));
                    pieces.push(Piece::Expr(right));
                    pieces.push(Piece::Text(" "));
                    pieces.push(Piece::Expr(left));
                }
            }
        }

        Ok(())
    }
}

/// Drops children through a heap stack instead of recursing once per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut detached = vec![];
        detach_children(self, &mut detached);

        // Each popped node has its children detached before it is dropped, so
        // its own `drop` finds only leaves.
        while let Some(mut expr) = detached.pop() {
            detach_children(&mut expr, &mut detached);
        }
    }
}

/// Moves every non-leaf child of `expr` onto `detached`, leaving a leaf behind.
fn detach_children(expr: &mut Expr, detached: &mut Vec<Expr>) {
    let mut detach = |child: &mut Box<Expr>| {
        if !matches!(**child, Expr::Number(_)) {
            detached.push(std::mem::replace(&mut **child, Expr::Number(0)));
        }
    };

    match expr {
        Expr::Number(_) => {}
        Expr::Unary { operand, .. } => detach(operand),
        Expr::Binary { left, right, .. } => {
            detach(left);
            detach(right);
        }
    }
}
