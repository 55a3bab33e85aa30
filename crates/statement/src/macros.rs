/// A bound value expression: `value!(42)`.
#[macro_export]
macro_rules! value {
    ($val:expr) => {
        $crate::ast::expr::Expr::Bind($crate::ast::expr::Bind::new($val))
    };
}

/// A column expression: `ident!("UserID")` or `ident!("tbl_Users", "UserID")`.
#[macro_export]
macro_rules! ident {
    ($name:expr) => {
        $crate::ast::expr::Expr::Column($crate::ast::expr::Ident::new($name))
    };
    ($qualifier:expr, $name:expr) => {
        $crate::ast::expr::Expr::Column($crate::ast::expr::Ident::qualified($qualifier, $name))
    };
}

/// Raw SQL with interleaved binds: `raw!("DATEADD(day, ", 7, ", GETDATE())")`.
///
/// Arguments alternate text, value, text, ... and always end with text.
#[macro_export]
macro_rules! raw {
    ($text:expr $(, $val:expr, $tail:expr)*) => {
        $crate::ast::expr::RawSql::new($text)$(.push_bind($val).push($tail))*
    };
}
