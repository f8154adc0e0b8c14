use std::fmt;

/// A complete parsed program: an ordered sequence of top-level statements.
///
/// `Program` is the root of the abstract syntax tree. The parser always
/// produces one, even for empty or partially broken input; callers decide
/// whether to evaluate it by inspecting the parser's error list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as the bodies of `if`, `while` and `fn` forms. They do not
/// open a new scope; only function calls create environments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// The statements inside the block, in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A single statement.
///
/// Statements are the units the parser dispatches on at the top level and
/// inside blocks. Every other construct in the language is an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let` binding: `let <name> = <expr>;`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound expression.
        value: Expr,
    },
    /// A `return` statement: `return <expr>;`.
    Return {
        /// The returned expression.
        value: Expr,
    },
    /// A bare expression evaluated for its value.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// A compound assignment: `<name> += <expr>;` and friends.
    CompoundAssignment {
        /// The variable being updated.
        name:  String,
        /// The arithmetic operator combined with the assignment.
        op:    BinaryOperator,
        /// The right-hand side of the update.
        value: Expr,
    },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr}"),
            Self::CompoundAssignment { name, op, value } => {
                write!(f, "{name} {op}= {value};")
            },
        }
    }
}

/// An expression node.
///
/// Expressions cover literals, identifiers, operator applications, control
/// flow (`if` and `while` are expressions here), function literals, calls,
/// and the collection literals. The `Display` implementation renders a node
/// back to surface syntax; operator applications are fully parenthesized so
/// the grouping chosen by the parser is visible.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A reference to a variable or built-in by name.
    Identifier {
        /// The referenced name.
        name: String,
    },
    /// A 64-bit integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
    },
    /// A boolean literal, written `True` or `False` in source.
    BooleanLiteral {
        /// The literal value.
        value: bool,
    },
    /// A string literal. The value is the raw text between the quotes;
    /// no escape sequences exist.
    StringLiteral {
        /// The literal contents.
        value: String,
    },
    /// A prefix operator application, `!x` or `-x`.
    Prefix {
        /// The operator.
        op:    UnaryOperator,
        /// The operand.
        right: Box<Expr>,
    },
    /// A binary operator application.
    Infix {
        /// Left operand.
        left:  Box<Expr>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A conditional: `if (<cond>) { ... } else { ... }`.
    ///
    /// The alternative is optional; a falsy condition without one yields
    /// `null`.
    If {
        /// The branch condition.
        condition:   Box<Expr>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated when the condition is falsy, if present.
        alternative: Option<Block>,
    },
    /// A loop: `while (<cond>) { ... }`.
    While {
        /// The loop condition, re-evaluated before every iteration.
        condition: Box<Expr>,
        /// The loop body.
        body:      Block,
    },
    /// A function literal: `fn(<params>) { ... }`.
    FunctionLiteral {
        /// Parameter names, possibly empty.
        parameters: Vec<String>,
        /// The function body.
        body:       Block,
    },
    /// A call: `<callee>(<args>)`.
    Call {
        /// The expression producing the callee.
        function:  Box<Expr>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Expr>,
    },
    /// An array literal: `[a, b, c]`.
    ArrayLiteral {
        /// Element expressions.
        elements: Vec<Expr>,
    },
    /// An index operation: `<left>[<index>]`.
    Index {
        /// The indexed expression.
        left:  Box<Expr>,
        /// The index expression.
        index: Box<Expr>,
    },
    /// A hash literal: `{k: v, ...}`.
    ///
    /// Pairs keep their source order; duplicate keys are not a parse error
    /// and resolve last-write-wins during evaluation.
    HashLiteral {
        /// Key/value expression pairs in source order.
        pairs: Vec<(Expr, Expr)>,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::IntegerLiteral { value } => write!(f, "{value}"),
            Self::BooleanLiteral { value } => {
                write!(f, "{}", if *value { "True" } else { "False" })
            },
            Self::StringLiteral { value } => write!(f, "{value}"),
            Self::Prefix { op, right } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if {condition} {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            },
            Self::While { condition, body } => {
                write!(f, "while ({condition}) {{ {body} }}")
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {{ {body} }}", parameters.join(", "))
            },
            Self::Call { function, arguments } => {
                let arguments = arguments.iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join(", ");
                write!(f, "{function}({arguments})")
            },
            Self::ArrayLiteral { elements } => {
                let elements = elements.iter()
                                       .map(ToString::to_string)
                                       .collect::<Vec<_>>()
                                       .join(", ");
                write!(f, "[{elements}]")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::HashLiteral { pairs } => {
                let pairs = pairs.iter()
                                 .map(|(key, value)| format!("{key}: {value}"))
                                 .collect::<Vec<_>>()
                                 .join(", ");
                write!(f, "{{{pairs}}}")
            },
        }
    }
}

/// A prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT by truthiness (`!x`).
    Not,
    /// Integer negation (`-x`).
    Negate,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
            Self::Negate => write!(f, "-"),
        }
    }
}

/// A binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`), also string concatenation.
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`), also string repetition.
    Mul,
    /// Integer division (`/`).
    Div,
    /// Exponentiation (`**`).
    Pow,
    /// Less than (`<`).
    Lt,
    /// Greater than (`>`).
    Gt,
    /// Equality (`==`).
    Eq,
    /// Inequality (`!=`).
    NotEq,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        };
        write!(f, "{operator}")
    }
}
