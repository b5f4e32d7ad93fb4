// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This driver builds a family from a plain-text instance file and prints
//! its cardinality (and, on demand, the family itself). Two formats are
//! understood:
//!
//! * inequalities: `n_vars n_rows` then, per row, `n_vars` coefficients, a
//!   sign among `<= = >=`, and the right-hand side;
//! * graphs: `n m` then `m` lines `u v`.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use zeddo::*;

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed number: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
    #[error(transparent)]
    ParseSign(#[from] ParseSignError),
    #[error("premature end of instance file")]
    Eof,
    #[error("construction failed: {0}")]
    Build(#[from] zeddo::Error),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Family {
    /// 0/1 solutions of the inequality system (inequality instance)
    Ineq,
    /// non-empty connected subgraphs
    Components,
    /// trees
    Trees,
    /// spanning trees
    SpanningTrees,
    /// simple paths joining --source to --target
    StPaths,
    /// simple cycles
    Cycles,
    /// Steiner trees over --terminals
    SteinerTrees,
    /// subgraphs with every degree in --lb ..= --ub
    Degree,
}

/// Builds the ZDD of a constrained family from an instance file, then
/// reports its size (and optionally its content).
#[derive(Parser)]
struct Args {
    /// Path to the instance file
    instance: PathBuf,
    /// The family to build
    #[arg(short, long, value_enum)]
    family: Family,
    /// Also enumerate vertex-labelled subgraphs
    #[arg(long, default_value_t = false)]
    with_vertex: bool,
    /// Source vertex of the paths
    #[arg(short, long, default_value_t = 0)]
    source: usize,
    /// Target vertex of the paths
    #[arg(short, long)]
    target: Option<usize>,
    /// Terminal vertices of the Steiner trees
    #[arg(long, value_delimiter = ',')]
    terminals: Vec<usize>,
    /// Uniform lower degree bound
    #[arg(long, default_value_t = 0)]
    lb: usize,
    /// Uniform upper degree bound
    #[arg(long)]
    ub: Option<usize>,
    /// Print the unfolded family, one subset per line
    #[arg(long, default_value_t = false)]
    unfold: bool,
}

fn next<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<&'a str, Error> {
    tokens.next().ok_or(Error::Eof)
}

fn read_inequalities(text: &str) -> Result<(Vec<Vec<i64>>, Vec<Sign>, Vec<i64>), Error> {
    let mut tokens = text.split_whitespace();
    let n_vars: usize = next(&mut tokens)?.parse()?;
    let n_rows: usize = next(&mut tokens)?.parse()?;

    let mut a = Vec::with_capacity(n_rows);
    let mut sign = Vec::with_capacity(n_rows);
    let mut b = Vec::with_capacity(n_rows);
    for _ in 0..n_rows {
        let mut row = Vec::with_capacity(n_vars);
        for _ in 0..n_vars {
            row.push(next(&mut tokens)?.parse::<i64>()?);
        }
        a.push(row);
        sign.push(next(&mut tokens)?.parse::<Sign>()?);
        b.push(next(&mut tokens)?.parse::<i64>()?);
    }
    Ok((a, sign, b))
}

fn read_graph(text: &str) -> Result<Graph, Error> {
    let mut tokens = text.split_whitespace();
    let n: usize = next(&mut tokens)?.parse()?;
    let m: usize = next(&mut tokens)?.parse()?;

    let mut g = Graph::new();
    for v in 0..n {
        g.add_vertex(v);
    }
    for _ in 0..m {
        let u: usize = next(&mut tokens)?.parse()?;
        let v: usize = next(&mut tokens)?.parse()?;
        g.add_edge(u, v);
    }
    if g.n_edges() > 0 {
        g.setup();
    }
    Ok(g)
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let text = std::fs::read_to_string(&args.instance)?;

    let (dd, n_vars) = match args.family {
        Family::Ineq => {
            let (a, sign, b) = read_inequalities(&text)?;
            let n_vars = a[0].len();
            (linear_inequalities(a, sign, b)?, n_vars)
        }
        family => {
            let g = read_graph(&text)?;
            let n_vars = if g.n_edges() > 0 { g.n_items() } else { 0 };
            let dd = match family {
                Family::Ineq => unreachable!("handled above"),
                Family::Components => connected_components(&g, args.with_vertex)?,
                Family::Trees => trees(&g, args.with_vertex)?,
                Family::SpanningTrees => spanning_trees(&g, args.with_vertex)?,
                Family::StPaths => {
                    let target = args.target.unwrap_or(g.max_vertex_number());
                    st_paths(&g, args.source, target, args.with_vertex)?
                }
                Family::Cycles => cycles(&g, args.with_vertex)?,
                Family::SteinerTrees => {
                    let terminals: BTreeSet<usize> = args.terminals.iter().copied().collect();
                    steiner_trees(&g, terminals, args.with_vertex)?
                }
                Family::Degree => {
                    let n = g.max_vertex_number() + 1;
                    let ub = args.ub.unwrap_or(g.n_edges());
                    degree_constraints(&g, &vec![args.lb; n], &vec![ub; n], args.with_vertex)?
                }
            };
            (dd, n_vars)
        }
    };

    println!("cardinality : {}", dd.cardinality());
    println!("nodes       : {}", dd.node_count());
    if args.unfold {
        for subset in dd.unfold(n_vars, true) {
            let line: Vec<String> = subset.iter().map(|i| i.to_string()).collect();
            println!("{}", line.join(" "));
        }
    }
    Ok(())
}
