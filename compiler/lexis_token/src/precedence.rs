//! Binary-operator precedence scale.
//!
//! Higher binds tighter. Kinds that are not binary operators have
//! precedence [`NONE`].
//!
//! | Rank | Level          | Operators                                   |
//! |------|----------------|---------------------------------------------|
//! | 14   | multiplicative | `* / ~/ %`                                  |
//! | 13   | additive       | `+ -`                                       |
//! | 12   | shift          | `<< >>`                                     |
//! | 11   | bitwise and    | `&`                                         |
//! | 10   | bitwise xor    | `^`                                         |
//! | 9    | bitwise or     | `\|`                                        |
//! | 8    | relational     | `>= > <= < is as`                           |
//! | 7    | equality       | `== != === !==`                             |
//! | 6    | logical and    | `&&`                                        |
//! | 5    | logical or     | `\|\|`                                      |
//! | 4    | if-null        | `??`                                        |
//! | 3    | conditional    | `?`                                         |
//! | 2    | assignment     | `= *= /= ~/= %= += -= <<= >>= &= ^= \|= ??=` |
//! | 1    | comma          | `,`                                         |

pub const NONE: u8 = 0;
pub const COMMA: u8 = 1;
/// Also the rank of the cascade operator `..`.
pub const ASSIGNMENT: u8 = 2;
pub const CONDITIONAL: u8 = 3;
pub const IF_NULL: u8 = 4;
pub const LOGICAL_OR: u8 = 5;
pub const LOGICAL_AND: u8 = 6;
pub const EQUALITY: u8 = 7;
pub const RELATIONAL: u8 = 8;
pub const BITWISE_OR: u8 = 9;
pub const BITWISE_XOR: u8 = 10;
pub const BITWISE_AND: u8 = 11;
pub const SHIFT: u8 = 12;
pub const ADDITIVE: u8 = 13;
pub const MULTIPLICATIVE: u8 = 14;
