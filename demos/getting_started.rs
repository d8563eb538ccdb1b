//! Walks a small tree, adds two nodes and prints the trees seen by each location.
//!
//! ```text
//!       root
//!        /\
//!       a  d
//!      / \  \
//!     b   c  e
//! ```

use std::fmt::{self, Display, Formatter};
use kindling::{zip, Location, ZipperResult, Zippable};

#[derive(Clone, Debug)]
enum Node {
    Leaf(&'static str),
    Branch(&'static str, Vec<Node>),
}
impl Zippable for Node {
    type Children = Vec<Node>;

    fn children(&self) -> Option<Vec<Node>> {
        match self {
            Self::Leaf(..) => None,
            Self::Branch(_, children) => Some(children.clone()),
        }
    }
    fn rebuild(&self, children: Vec<Node>) -> Node {
        match self {
            Self::Leaf(name) | Self::Branch(name, _) => Self::Branch(*name, children),
        }
    }
}
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(name) => f.write_str(name),
            Self::Branch(name, children) => {
                write!(f, "{}:[", name)?;
                for (i, child) in children.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    Display::fmt(child, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

fn sample() -> Node {
    Node::Branch(
        "root",
        vec![
            Node::Branch("a", vec![Node::Leaf("b"), Node::Leaf("c")]),
            Node::Branch("d", vec![Node::Leaf("e")]),
        ],
    )
}

fn print_tree(title: &str, location: &Location<Node>) {
    println!("{}:", title);
    println!("{}", location.unzip());
}

fn main() -> ZipperResult<()> {
    let root = zip(sample());

    // Move to node "e"
    let e = root.down()?.right()?.down()?;
    // Add a sibling on the right
    let f = e.insert_right(vec![Node::Leaf("f")])?;
    // Move up and add a sibling on the left
    let g = f.up()?.insert_left(vec![Node::Leaf("g")])?;

    print_tree("Tree e", &e);
    print_tree("Tree f", &f);
    print_tree("Tree g", &g);
    Ok(())
}
