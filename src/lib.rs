// textcompare: angular distance between two text documents
//
// This is the library root. A document is reduced to a bag-of-words frequency
// vector (corpus), two vectors are compared by the angle between them
// (similarity), and the compare/output modules tie that to files and stdout.

pub mod compare;
pub mod config;
pub mod corpus;
pub mod output;
pub mod similarity;
