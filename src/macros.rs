/// Builds an [`Element`](crate::Element) tree.
///
/// Children are written inside braces: `"Name" { ... }` nests an element and
/// `"Name" => value, value, ...;` adds an attribute. Values go through
/// [`IntoValue`](crate::IntoValue), so numbers, booleans and `None` work directly.
///
/// ```rust
/// use sml::{sml, Document};
///
/// let root = sml!("Root" {
///     "Person" {
///         "Name" => "John";
///         "Age" => 30;
///     }
///     "Point" => 1, 2, None::<i32>;
/// });
///
/// let document = Document::new(root);
/// assert_eq!(
///     document.to_string_minified(),
///     "Root\nPerson\nName John\nAge 30\n-\nPoint 1 2 -\n-"
/// );
/// ```
#[macro_export]
macro_rules! sml {
    (@children $element:ident; ) => {};

    // Nested element
    (@children $element:ident; $name:literal { $($body:tt)* } $($rest:tt)*) => {
        $element.add($crate::sml!($name { $($body)* }));
        $crate::sml!(@children $element; $($rest)*);
    };

    // Attribute with one or more values
    (@children $element:ident; $name:literal => $first:expr $(, $value:expr)* ; $($rest:tt)*) => {
        {
            #[allow(unused_mut)]
            let mut attribute = $crate::Attribute::with_value($name, $first);
            $( attribute.push_value($value); )*
            $element.add(attribute);
        }
        $crate::sml!(@children $element; $($rest)*);
    };

    // Element
    ($name:literal { $($body:tt)* }) => {{
        #[allow(unused_mut)]
        let mut element = $crate::Element::new($name);
        $crate::sml!(@children element; $($body)*);
        element
    }};
}
