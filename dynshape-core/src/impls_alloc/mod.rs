mod btreemap;
mod string;
mod vec;
