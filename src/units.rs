pub mod temperature {
    pub fn c2f(temp_c: f32) -> f32 {
        temp_c * 9.0 / 5.0 + 32.0
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Scale {
        Celsius,
        Fahrenheit,
    }

    impl Scale {
        pub fn convert(self, temp_c: f32) -> f32 {
            match self {
                Scale::Celsius => temp_c,
                Scale::Fahrenheit => c2f(temp_c),
            }
        }

        pub fn symbol(self) -> &'static str {
            match self {
                Scale::Celsius => "C",
                Scale::Fahrenheit => "F",
            }
        }
    }

    #[test]
    fn test_temperature() {
        assert_eq!(c2f(0.0), 32.0);
        assert_eq!(c2f(100.0), 212.0);
        assert_eq!(c2f(-40.0), -40.0);
        assert_eq!(Scale::Celsius.convert(-3.0), -3.0);
        assert_eq!(Scale::Fahrenheit.convert(5.0), 41.0);
    }
}
