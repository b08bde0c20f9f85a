mod array;
mod option;
mod pointer;
mod scalar;
