use serde_json::json;
use sexpr_parser::parse_source;
use sexpr_transform::{transform, Node, Program};

#[test]
fn target_tree_serializes_to_conventional_shape() {
    let target = transform(&parse_source("(add 2 (subtract 4 2))").unwrap()).unwrap();
    let value = serde_json::to_value(&target).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "Program",
            "body": [{
                "type": "ExpressionStatement",
                "expression": {
                    "type": "CallExpression",
                    "callee": { "name": "add" },
                    "arguments": [
                        { "type": "NumberLiteral", "value": "2" },
                        {
                            "type": "CallExpression",
                            "callee": { "name": "subtract" },
                            "arguments": [
                                { "type": "NumberLiteral", "value": "4" },
                                { "type": "NumberLiteral", "value": "2" }
                            ]
                        }
                    ]
                }
            }]
        })
    );
}

#[test]
fn independent_transforms_do_not_share_state() {
    let first = parse_source("(a 1)").unwrap();
    let second = parse_source("(b 2)").unwrap();

    let handles = [first, second].map(|source| std::thread::spawn(move || transform(&source)));
    let results: Vec<Program> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();

    assert_eq!(results[0].body, vec![Node::statement(Node::call("a", vec![Node::number("1")]))]);
    assert_eq!(results[1].body, vec![Node::statement(Node::call("b", vec![Node::number("2")]))]);
}
