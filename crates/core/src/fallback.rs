//! Static skeleton projects served when response recovery fails.
//!
//! One schema-valid project per flavor, built once at first use and never
//! mutated. The explanation strings disclose that a fallback was served so
//! the caller's UI can surface degraded generation to the end user. The
//! system prefers "something that runs" over "nothing".

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use crate::project::{Flavor, GeneratedProject, ProjectFile};

/// Look up the fallback project for a flavor.
pub fn fallback_project(flavor: Flavor) -> GeneratedProject {
    CATALOG[&flavor].clone()
}

static CATALOG: LazyLock<HashMap<Flavor, GeneratedProject>> = LazyLock::new(|| {
    let mut catalog = HashMap::new();
    catalog.insert(Flavor::Web, web_fallback());
    catalog.insert(Flavor::Flutter, flutter_fallback());
    catalog.insert(Flavor::ReactNative, react_native_fallback());
    catalog.insert(Flavor::Combined, combined_fallback());
    catalog
});

fn web_fallback() -> GeneratedProject {
    let mut project = skeleton(
        "Web Application",
        "Generated web application (fallback response due to JSON parsing issues)",
    );
    project.files = file_map(&[
        ("/App.js", WEB_APP_JS),
        ("/components/Header.jsx", WEB_HEADER_JSX),
        ("/pages/Home.jsx", WEB_HOME_JSX),
        ("/package.json", WEB_PACKAGE_JSON),
    ]);
    project.rebuild_file_lists();
    project
}

fn flutter_fallback() -> GeneratedProject {
    let mut project = skeleton(
        "Flutter App",
        "Generated Flutter app code (fallback response due to JSON parsing issues)",
    );
    project.flutter_files = file_map(&[
        ("lib/main.dart", FLUTTER_MAIN_DART),
        ("pubspec.yaml", FLUTTER_PUBSPEC_YAML),
    ]);
    project.rebuild_file_lists();
    project
}

fn react_native_fallback() -> GeneratedProject {
    let mut project = skeleton(
        "React Native App",
        "Generated React Native app code (fallback response due to JSON parsing issues)",
    );
    project.rn_files = file_map(&[
        ("App.tsx", RN_APP_TSX),
        ("package.json", RN_PACKAGE_JSON),
    ]);
    project.rebuild_file_lists();
    project
}

fn combined_fallback() -> GeneratedProject {
    let mut project = skeleton(
        "Mobile App Project",
        "Generated mobile app code (fallback response due to JSON parsing issues)",
    );
    project.flutter_files = file_map(&[
        ("lib/main.dart", FLUTTER_MAIN_DART),
        ("pubspec.yaml", FLUTTER_PUBSPEC_YAML),
    ]);
    project.rn_files = file_map(&[
        ("App.tsx", RN_APP_TSX),
        ("package.json", RN_PACKAGE_JSON),
    ]);
    project.rebuild_file_lists();
    project
}

fn skeleton(title: &str, explanation: &str) -> GeneratedProject {
    GeneratedProject {
        project_title: title.to_string(),
        explanation: explanation.to_string(),
        ..Default::default()
    }
}

fn file_map(entries: &[(&str, &str)]) -> BTreeMap<String, ProjectFile> {
    entries
        .iter()
        .map(|(path, code)| (path.to_string(), ProjectFile::new(*code)))
        .collect()
}

const WEB_APP_JS: &str = r##"import React from 'react';
import { BrowserRouter as Router, Routes, Route } from 'react-router-dom';
import Header from './components/Header';
import Home from './pages/Home';

function App() {
  return (
    <Router>
      <div className="min-h-screen bg-gray-50">
        <Header />
        <main className="flex-1">
          <Routes>
            <Route path="/" element={<Home />} />
          </Routes>
        </main>
      </div>
    </Router>
  );
}

export default App;
"##;

const WEB_HEADER_JSX: &str = r##"import React from 'react';
import { Link } from 'react-router-dom';
import { Menu, X } from 'lucide-react';

const Header = () => {
  const [isMenuOpen, setIsMenuOpen] = React.useState(false);

  return (
    <header className="bg-white shadow-sm border-b">
      <div className="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
        <div className="flex justify-between items-center h-16">
          <Link to="/" className="text-xl font-bold text-gray-900">
            Generated App
          </Link>

          <nav className="hidden md:flex space-x-8">
            <Link to="/" className="text-gray-700 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium">
              Home
            </Link>
          </nav>

          <button
            className="md:hidden"
            onClick={() => setIsMenuOpen(!isMenuOpen)}
          >
            {isMenuOpen ? <X className="h-6 w-6" /> : <Menu className="h-6 w-6" />}
          </button>
        </div>

        {isMenuOpen && (
          <div className="md:hidden">
            <div className="px-2 pt-2 pb-3 space-y-1 sm:px-3">
              <Link to="/" className="block px-3 py-2 rounded-md text-base font-medium text-gray-700 hover:text-gray-900">
                Home
              </Link>
            </div>
          </div>
        )}
      </div>
    </header>
  );
};

export default Header;
"##;

const WEB_HOME_JSX: &str = r##"import React from 'react';
import { ArrowRight } from 'lucide-react';

const Home = () => {
  return (
    <div className="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
      <div className="text-center">
        <h1 className="text-4xl font-bold text-gray-900 mb-6">
          Welcome to Our App
        </h1>
        <p className="text-xl text-gray-600 mb-8 max-w-2xl mx-auto">
          This is a fully functional React application with modern UI and responsive design.
        </p>
        <div className="flex justify-center space-x-4">
          <a
            href="/"
            className="inline-flex items-center px-6 py-3 border border-transparent text-base font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 transition-colors"
          >
            Learn More
            <ArrowRight className="ml-2 h-5 w-5" />
          </a>
        </div>
      </div>

      <div className="mt-16 grid grid-cols-1 md:grid-cols-3 gap-8">
        <div className="bg-white p-6 rounded-lg shadow-md">
          <h3 className="text-lg font-semibold text-gray-900 mb-2">Feature 1</h3>
          <p className="text-gray-600">Description of the first feature.</p>
        </div>
        <div className="bg-white p-6 rounded-lg shadow-md">
          <h3 className="text-lg font-semibold text-gray-900 mb-2">Feature 2</h3>
          <p className="text-gray-600">Description of the second feature.</p>
        </div>
        <div className="bg-white p-6 rounded-lg shadow-md">
          <h3 className="text-lg font-semibold text-gray-900 mb-2">Feature 3</h3>
          <p className="text-gray-600">Description of the third feature.</p>
        </div>
      </div>
    </div>
  );
};

export default Home;
"##;

const WEB_PACKAGE_JSON: &str = r##"{
  "name": "generated-web-app",
  "version": "0.0.1",
  "private": true,
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "react": "^18.2.0",
    "react-dom": "^18.2.0",
    "react-router-dom": "^6.8.0",
    "lucide-react": "^0.263.1",
    "framer-motion": "^10.16.4"
  },
  "devDependencies": {
    "@vitejs/plugin-react": "^4.0.3",
    "autoprefixer": "^10.4.14",
    "postcss": "^8.4.24",
    "tailwindcss": "^3.3.2",
    "vite": "^4.4.5"
  }
}
"##;

const FLUTTER_MAIN_DART: &str = r##"import 'package:flutter/material.dart';
import 'package:go_router/go_router.dart';

void main() {
  runApp(MyApp());
}

final _router = GoRouter(
  routes: [
    GoRoute(
      path: '/',
      builder: (context, state) => HomeScreen(),
    ),
    GoRoute(
      path: '/product/:id',
      builder: (context, state) {
        final productId = state.pathParameters['id'];
        return ProductScreen(productId: productId ?? 'default_id');
      },
    ),
  ],
);

class MyApp extends StatelessWidget {
  @override
  Widget build(BuildContext context) {
    return MaterialApp.router(
      routerConfig: _router,
      title: 'Generated App',
      theme: ThemeData(
        primarySwatch: Colors.blue,
        useMaterial3: true,
      ),
    );
  }
}

class HomeScreen extends StatelessWidget {
  @override
  Widget build(BuildContext context) {
    return Scaffold(
      appBar: AppBar(
        title: const Text('Home'),
      ),
      body: Center(
        child: Column(
          mainAxisAlignment: MainAxisAlignment.center,
          children: <Widget>[
            const Text(
              'Welcome to the App!',
              style: TextStyle(fontSize: 24, fontWeight: FontWeight.bold),
            ),
            const SizedBox(height: 20),
            ElevatedButton(
              onPressed: () => GoRouter.of(context).go('/product/123'),
              child: const Text('View Product'),
            ),
          ],
        ),
      ),
    );
  }
}

class ProductScreen extends StatelessWidget {
  final String productId;

  const ProductScreen({Key? key, required this.productId}) : super(key: key);

  @override
  Widget build(BuildContext context) {
    return Scaffold(
      appBar: AppBar(
        title: Text('Product ID: $productId'),
      ),
      body: Center(
        child: Column(
          mainAxisAlignment: MainAxisAlignment.center,
          children: <Widget>[
            Text(
              'Product Details',
              style: TextStyle(fontSize: 24, fontWeight: FontWeight.bold),
            ),
            const SizedBox(height: 10),
            Text('Product ID: $productId'),
            const SizedBox(height: 20),
            ElevatedButton(
              onPressed: () => GoRouter.of(context).go('/'),
              child: const Text('Back to Home'),
            ),
          ],
        ),
      ),
    );
  }
}
"##;

const FLUTTER_PUBSPEC_YAML: &str = r##"name: generated_app
description: A generated Flutter app

publish_to: 'none'

version: 1.0.0+1

environment:
  sdk: '>=3.0.0 <4.0.0'

dependencies:
  flutter:
    sdk: flutter
  go_router: ^12.0.0
  provider: ^6.0.0
  cupertino_icons: ^1.0.2

dev_dependencies:
  flutter_test:
    sdk: flutter
  flutter_lints: ^2.0.0

flutter:
  uses-material-design: true
"##;

const RN_APP_TSX: &str = r##"import React from 'react';
import { NavigationContainer } from '@react-navigation/native';
import { createNativeStackNavigator } from '@react-navigation/native-stack';
import { Text, View, Button, StyleSheet } from 'react-native';

const Stack = createNativeStackNavigator();

function HomeScreen({ navigation }: { navigation: any }) {
  return (
    <View style={styles.container}>
      <Text style={styles.title}>Welcome to the App!</Text>
      <Button
        title="View Product"
        onPress={() => navigation.navigate('Product', { productId: '123' })}
      />
    </View>
  );
}

function ProductScreen({ route, navigation }: { route: any; navigation: any }) {
  const { productId } = route.params;
  return (
    <View style={styles.container}>
      <Text style={styles.title}>Product Details</Text>
      <Text style={styles.subtitle}>Product ID: {productId}</Text>
      <Button
        title="Back to Home"
        onPress={() => navigation.goBack()}
      />
    </View>
  );
}

function App() {
  return (
    <NavigationContainer>
      <Stack.Navigator initialRouteName="Home">
        <Stack.Screen name="Home" component={HomeScreen} />
        <Stack.Screen name="Product" component={ProductScreen} />
      </Stack.Navigator>
    </NavigationContainer>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    justifyContent: 'center',
    alignItems: 'center',
    backgroundColor: '#F5FCFF',
    padding: 20,
  },
  title: {
    fontSize: 24,
    fontWeight: 'bold',
    marginBottom: 20,
    textAlign: 'center',
  },
  subtitle: {
    fontSize: 16,
    marginBottom: 20,
    textAlign: 'center',
  },
});

export default App;
"##;

const RN_PACKAGE_JSON: &str = r##"{
  "name": "generated-app",
  "version": "0.0.1",
  "private": true,
  "scripts": {
    "android": "react-native run-android",
    "ios": "react-native run-ios",
    "start": "react-native start",
    "test": "jest",
    "lint": "eslint ."
  },
  "dependencies": {
    "@react-navigation/native": "^6.1.9",
    "@react-navigation/native-stack": "^6.9.17",
    "react": "18.2.0",
    "react-native": "0.73.0",
    "react-native-reanimated": "~3.6.2"
  },
  "devDependencies": {
    "@babel/core": "^7.20.0",
    "@types/react": "^18.0.24",
    "jest": "^29.2.1",
    "typescript": "^5.1.3"
  },
  "engines": {
    "node": ">=18"
  }
}
"##;
