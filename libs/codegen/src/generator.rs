use crate::error::CodegenError;
use config::constants::{
    CompilerConfig, ARGUMENT_SEPARATOR, LINE_SEPARATOR, STACKER_STACK_SIZE_BYTES,
    STACK_RED_ZONE_BYTES, STATEMENT_TERMINATOR, STRING_DELIMITER,
};
use sexpr_transform::ast::{Identifier, Node, Program};

/// Render `program` with the default output grammar.
pub fn generate(program: &Program) -> Result<String, CodegenError> {
    Generator::default().generate(program)
}

/// Renders target trees. Holds only the separators, so one generator can
/// render any number of trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    argument_separator: String,
    statement_terminator: String,
    line_separator: String,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            argument_separator: ARGUMENT_SEPARATOR.to_string(),
            statement_terminator: STATEMENT_TERMINATOR.to_string(),
            line_separator: LINE_SEPARATOR.to_string(),
        }
    }
}

impl Generator {
    pub fn from_config(config: &CompilerConfig) -> Self {
        Self {
            argument_separator: config.argument_separator.clone(),
            statement_terminator: config.statement_terminator.clone(),
            line_separator: config.line_separator.clone(),
        }
    }

    /// Each body element on its own line, in order.
    pub fn generate(&self, program: &Program) -> Result<String, CodegenError> {
        let mut out = String::new();
        self.render_list(&program.body, &self.line_separator, &mut out)?;
        Ok(out)
    }

    /// Render a single node and everything below it.
    pub fn generate_node(&self, node: &Node) -> Result<String, CodegenError> {
        let mut out = String::new();
        self.render(node, &mut out)?;
        Ok(out)
    }

    fn render(&self, node: &Node, out: &mut String) -> Result<(), CodegenError> {
        stacker::maybe_grow(STACK_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            match node {
                Node::ExpressionStatement(statement) => {
                    self.render(&statement.expression, out)?;
                    out.push_str(&self.statement_terminator);
                }
                Node::CallExpression(call) => {
                    self.render_identifier(&call.callee, out);
                    out.push('(');
                    self.render_list(&call.arguments, &self.argument_separator, out)?;
                    out.push(')');
                }
                Node::Identifier(identifier) => self.render_identifier(identifier, out),
                Node::NumberLiteral(number) => out.push_str(&number.value),
                Node::StringLiteral(string) => {
                    out.push(STRING_DELIMITER);
                    out.push_str(&string.value);
                    out.push(STRING_DELIMITER);
                }
                _ => return Err(CodegenError::UnsupportedNode { kind: node.kind() }),
            }
            Ok(())
        })
    }

    fn render_identifier(&self, identifier: &Identifier, out: &mut String) {
        out.push_str(&identifier.name);
    }

    fn render_list(
        &self,
        nodes: &[Node],
        separator: &str,
        out: &mut String,
    ) -> Result<(), CodegenError> {
        for (index, node) in nodes.iter().enumerate() {
            if index > 0 {
                out.push_str(separator);
            }
            self.render(node, out)?;
        }
        Ok(())
    }
}
