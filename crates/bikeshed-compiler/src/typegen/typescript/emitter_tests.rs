use indoc::indoc;

use super::{Config, Emitter, emit};
use crate::test_utils::{expect_model, expect_types, expect_types_with};

#[test]
fn interface_members() {
    let out = expect_types(indoc! {"
        interface Widget : Base {
          const unsigned short MODE = 0x2;
          const boolean DEBUG = false;
          const double RATIO = 1.5;
          readonly attribute DOMString id;
          stringifier attribute USVString href;
          Promise<undefined> load(optional long timeout);
          getter Widget? (unsigned long index);
          setter undefined (unsigned long index, Widget value);
          static Widget create();
        };
        interface Base {};
    "});

    insta::assert_snapshot!(out, @r"
    export interface Base {}

    export interface Widget extends Base {
      readonly MODE: 2;
      readonly DEBUG: false;
      readonly RATIO: number;
      readonly id: string;
      href: string;
      toString(): string;
      load(timeout?: number): Promise<void>;
      [index: number]: Widget | null;
    }
    ");
}

#[test]
fn interface_object_for_exposed_interface() {
    let out = expect_types(indoc! {"
        [Exposed=Window]
        interface Counter {
          constructor();
          constructor(long start);
          const long MAX = 10;
          static readonly attribute long instances;
          static Counter from(sequence<long> values);
          readonly attribute long value;
          undefined increment(optional long by = 1);
        };
    "});

    insta::assert_snapshot!(out, @r"
    interface Counter {
      readonly MAX: 10;
      readonly value: number;
      increment(by?: number): void;
    }

    declare var Counter: {
      prototype: Counter;
      new(): Counter;
      new(start: number): Counter;
      readonly MAX: 10;
      readonly instances: number;
      from(values: number[]): Counter;
    };
    ");
}

#[test]
fn no_interface_object() {
    let out = expect_types(indoc! {"
        [Exposed=Window, LegacyNoInterfaceObject]
        interface Hidden { readonly attribute long x; };
    "});

    insta::assert_snapshot!(out, @r"
    interface Hidden {
      readonly x: number;
    }
    ");
}

#[test]
fn namespace() {
    let out = expect_types(indoc! {"
        [Exposed=Window]
        namespace console {
          const long LEVEL = 3;
          readonly attribute DOMString name;
          attribute long depth;
          undefined log(any... data);
        };
    "});

    insta::assert_snapshot!(out, @r"
    declare namespace console {
      const LEVEL: 3;
      const name: string;
      var depth: number;
      function log(...data: any[]): void;
    }
    ");
}

#[test]
fn namespace_inside_declare_global() {
    let out = expect_types(indoc! {"
        interface Foo {};
        [Exposed=Window]
        namespace ns { undefined f(); };
    "});

    insta::assert_snapshot!(out, @r"
    export interface Foo {}

    declare global {
      namespace ns {
        function f(): void;
      }
    }
    ");
}

#[test]
fn aliases_and_callbacks() {
    let out = expect_types(indoc! {r#"
        callback Listener = undefined (Event event, optional boolean capture);
        typedef (DOMString or sequence<DOMString>) Names;
        enum Direction { "up", "down" };
        callback interface Handler { boolean handle(Event event); };
        dictionary Event { required DOMString type; };
    "#});

    insta::assert_snapshot!(out, @r#"
    export interface Event {
      type: string;
    }

    export type Listener = (event: Event, capture?: boolean) => void;

    export type Names = string | string[];

    export type Direction = "up" | "down";

    export interface Handler {
      handle(event: Event): boolean;
    }
    "#);
}

#[test]
fn iterable_declarations_expand() {
    let out = expect_types(indoc! {"
        interface Numbers { iterable<long>; };
        interface Registry { readonly maplike<DOMString, long>; };
        interface Tags { setlike<DOMString>; };
        interface Stream { async iterable<DOMString>(optional long limit); };
    "});

    insta::assert_snapshot!(out, @r"
    export interface Numbers {
      [Symbol.iterator](): IterableIterator<number>;
      entries(): IterableIterator<[number, number]>;
      keys(): IterableIterator<number>;
      values(): IterableIterator<number>;
      forEach(callbackfn: (value: number, key: number, parent: Numbers) => void, thisArg?: any): void;
    }

    export interface Registry {
      readonly size: number;
      [Symbol.iterator](): IterableIterator<[string, number]>;
      entries(): IterableIterator<[string, number]>;
      keys(): IterableIterator<string>;
      values(): IterableIterator<number>;
      forEach(callbackfn: (value: number, key: string, parent: Registry) => void, thisArg?: any): void;
      get(key: string): number | undefined;
      has(key: string): boolean;
    }

    export interface Tags {
      readonly size: number;
      [Symbol.iterator](): IterableIterator<string>;
      entries(): IterableIterator<[string, string]>;
      keys(): IterableIterator<string>;
      values(): IterableIterator<string>;
      forEach(callbackfn: (value: string, key: string, parent: Tags) => void, thisArg?: any): void;
      has(value: string): boolean;
      add(value: string): this;
      delete(value: string): boolean;
      clear(): void;
    }

    export interface Stream {
      [Symbol.asyncIterator](limit?: number): AsyncIterableIterator<string>;
      values(limit?: number): AsyncIterableIterator<string>;
    }
    ");
}

#[test]
fn nominal_brands_keep_subtyping() {
    let out = expect_types_with(
        indoc! {"
            interface Base {};
            interface Derived : Base {};
            dictionary Opts { long x; };
            callback interface Cb { undefined run(); };
        "},
        false,
        true,
    );

    insta::assert_snapshot!(out, @r#"
    export interface Base {
      readonly __brand_Base: "Base";
    }

    export interface Derived extends Base {
      readonly __brand_Derived: "Derived";
    }

    export interface Opts {
      readonly __brand_Opts: "Opts";
      x?: number;
    }

    export interface Cb {
      run(): void;
    }
    "#);
}

#[test]
fn header_and_indent() {
    let model = expect_model("interface A { attribute long x; };");
    let config = Config::new().header("Generated\n\nDo not edit").indent(4);

    insta::assert_snapshot!(Emitter::new(&model, config).emit(), @r"
    // Generated
    //
    // Do not edit

    export interface A {
        x: number;
    }
    ");
}

#[test]
fn names_are_made_safe() {
    let out = expect_types("interface N { attribute long foo-bar; undefined f(long function); };");

    insta::assert_snapshot!(out, @r#"
    export interface N {
      "foo-bar": number;
      f(function_: number): void;
    }
    "#);
}

#[test]
fn overloads_with_equal_signatures_collapse() {
    let out = expect_types(indoc! {"
        interface O {
          undefined f(long x);
          undefined f(double x);
          undefined g(long x);
          undefined g(DOMString x);
        };
    "});

    insta::assert_snapshot!(out, @r"
    export interface O {
      f(x: number): void;
      g(x: number): void;
      g(x: string): void;
    }
    ");
}

#[test]
fn same_model_under_both_policies() {
    let model = expect_model("[Exposed=Window] interface A {}; interface B {};");

    let scoped = emit(&model, Config::new());
    let global = emit(&model, Config::new().force_global(true));

    assert!(scoped.contains("declare global {"));
    assert!(scoped.contains("export interface B {}"));
    assert!(!global.contains("export"));
    assert!(global.contains("declare var A: {"));
}
