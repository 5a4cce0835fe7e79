pub use self::element::Element;

mod element;
