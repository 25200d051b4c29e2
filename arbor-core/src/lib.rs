//! Arbor core library.
//!
//! Disjoint-set (union-find) collections in two representations, and the
//! graph algorithms built on them: Kruskal's and Prim's minimum spanning
//! trees and connected components over an undirected graph.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod components;
mod disjoint_sets;
mod error;
mod graph;
mod mst;
mod multiset;

pub use crate::{
    builder::{DisjointSetBackend, SpanningAlgorithm, SpanningTreeBuilder, SpanningTreeSolver},
    components::connected_components,
    disjoint_sets::{DisjointSets, ForestDisjointSets, LinkedListDisjointSets, Unioned},
    error::{
        AlgorithmError, AlgorithmErrorCode, BuilderError, BuilderErrorCode, DisjointSetError,
        DisjointSetErrorCode, GraphError, GraphErrorCode, MultisetError, MultisetErrorCode,
        Result,
    },
    graph::{AdjacencyMatrixUndirectedGraph, Graph, GraphEdge, NodeId},
    mst::{PrimTree, SpanningTree, kruskal, kruskal_with, prim},
    multiset::Multiset,
};
